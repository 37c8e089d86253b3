//! Parsed docstring data model

use serde::Serialize;

/// Docstring dialect a result was produced by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocstringStyle {
    #[default]
    JsDoc,
}

/// A `@param`-like entry (param, typedef, property, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocstringParam {
    pub args: Vec<String>,
    pub description: String,
    pub arg_name: Option<String>,
    pub type_name: Option<String>,
    pub is_optional: bool,
    pub default: Option<String>,
}

/// A `@return` or `@yield` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocstringReturns {
    pub args: Vec<String>,
    pub description: String,
    pub type_name: Option<String>,
    pub is_generator: bool,
}

/// A `@throws`-like entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocstringRaises {
    pub args: Vec<String>,
    pub description: String,
    pub type_name: Option<String>,
}

/// A `@deprecated` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocstringDeprecated {
    pub args: Vec<String>,
    pub description: String,
    pub version: Option<String>,
}

/// Any other tag: raw arguments and trailing text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocstringTag {
    pub args: Vec<String>,
    pub description: String,
}

/// One `@tag` occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocstringMeta {
    Param(DocstringParam),
    Returns(DocstringReturns),
    Raises(DocstringRaises),
    Deprecated(DocstringDeprecated),
    Tag(DocstringTag),
}

impl DocstringMeta {
    /// Token set the entry was built from; the first token is the tag name
    pub fn args(&self) -> &[String] {
        match self {
            DocstringMeta::Param(m) => &m.args,
            DocstringMeta::Returns(m) => &m.args,
            DocstringMeta::Raises(m) => &m.args,
            DocstringMeta::Deprecated(m) => &m.args,
            DocstringMeta::Tag(m) => &m.args,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            DocstringMeta::Param(m) => &m.description,
            DocstringMeta::Returns(m) => &m.description,
            DocstringMeta::Raises(m) => &m.description,
            DocstringMeta::Deprecated(m) => &m.description,
            DocstringMeta::Tag(m) => &m.description,
        }
    }

    /// Tag name without the `@`
    pub fn tag(&self) -> &str {
        self.args().first().map(String::as_str).unwrap_or_default()
    }
}

/// Result of parsing one documentation comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Docstring {
    pub style: DocstringStyle,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub blank_after_short_description: bool,
    pub blank_after_long_description: bool,
    /// Entries in source order
    pub meta: Vec<DocstringMeta>,
}

impl Docstring {
    pub fn params(&self) -> Vec<&DocstringParam> {
        self.meta
            .iter()
            .filter_map(|m| match m {
                DocstringMeta::Param(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn raises(&self) -> Vec<&DocstringRaises> {
        self.meta
            .iter()
            .filter_map(|m| match m {
                DocstringMeta::Raises(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    /// Every `@return` and `@yield` entry
    pub fn many_returns(&self) -> Vec<&DocstringReturns> {
        self.meta
            .iter()
            .filter_map(|m| match m {
                DocstringMeta::Returns(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    /// First non-generator returns entry, else the first yield entry
    pub fn returns(&self) -> Option<&DocstringReturns> {
        self.many_returns()
            .into_iter()
            .find(|r| !r.is_generator)
            .or_else(|| self.many_returns().into_iter().next())
    }

    pub fn deprecation(&self) -> Option<&DocstringDeprecated> {
        self.meta.iter().find_map(|m| match m {
            DocstringMeta::Deprecated(d) => Some(d),
            _ => None,
        })
    }

    /// Short and long description joined the way they were laid out
    pub fn description(&self) -> Option<String> {
        match (&self.short_description, &self.long_description) {
            (None, None) => None,
            (Some(short), None) => Some(short.clone()),
            (None, Some(long)) => Some(long.clone()),
            (Some(short), Some(long)) => {
                let sep = if self.blank_after_short_description {
                    "\n\n"
                } else {
                    "\n"
                };
                Some(format!("{}{}{}", short, sep, long))
            }
        }
    }
}
