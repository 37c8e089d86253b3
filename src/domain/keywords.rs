//! Tag keyword classes and their argument grammars

/// Keyword class a tag name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// param, typedef, property and their aliases
    Param,
    /// return, returns
    Returns,
    /// yield, yields
    Yields,
    /// throws and the raise/exception aliases
    Raises,
    /// deprecated, deprecation
    Deprecation,
    /// Anything else
    Other,
}

/// How the text after a tag name is split into argument tokens.
/// Chosen by exact tag name, not by keyword class: `@arg` is param-like
/// but takes no structured arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// `@tag <placeholder> <args> [description]`
    Named,
    /// `@tag <args> [description]`
    Typed,
    /// `@tag [description]`
    Free,
}

const PARAM_KEYWORDS: &[&str] = &[
    "param",
    "parameter",
    "arg",
    "argument",
    "attribute",
    "key",
    "keyword",
    "typedef",
    "property",
    "prop",
];
const RETURNS_KEYWORDS: &[&str] = &["return", "returns"];
const YIELDS_KEYWORDS: &[&str] = &["yield", "yields"];
const RAISES_KEYWORDS: &[&str] = &["throws", "throw", "exception", "raises", "raise", "except"];
const DEPRECATION_KEYWORDS: &[&str] = &["deprecated", "deprecation"];

const NAMED_GRAMMAR_TAGS: &[&str] = &["param", "typedef", "property"];
const TYPED_GRAMMAR_TAGS: &[&str] = &["return", "throws", "type"];

impl TagKind {
    /// Classify a tag name (without `@`)
    pub fn of(tag: &str) -> Self {
        if PARAM_KEYWORDS.contains(&tag) {
            TagKind::Param
        } else if RETURNS_KEYWORDS.contains(&tag) {
            TagKind::Returns
        } else if YIELDS_KEYWORDS.contains(&tag) {
            TagKind::Yields
        } else if RAISES_KEYWORDS.contains(&tag) {
            TagKind::Raises
        } else if DEPRECATION_KEYWORDS.contains(&tag) {
            TagKind::Deprecation
        } else {
            TagKind::Other
        }
    }

}

impl Grammar {
    /// Grammar for a tag name (without `@`)
    pub fn of(tag: &str) -> Self {
        if NAMED_GRAMMAR_TAGS.contains(&tag) {
            Grammar::Named
        } else if TYPED_GRAMMAR_TAGS.contains(&tag) {
            Grammar::Typed
        } else {
            Grammar::Free
        }
    }
}
