//! Builds typed metadata records from interpreted tag chunks

use super::docstring::{
    DocstringDeprecated, DocstringMeta, DocstringParam, DocstringRaises, DocstringReturns,
    DocstringTag,
};
use super::interpreter::TagChunk;
use super::keywords::TagKind;
use crate::error::ParseError;
use regex::Regex;
use std::sync::OnceLock;

/// `{type}` anywhere in a token
fn type_span_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\{.*?\}").unwrap())
}

/// `{type}` at the start of a token
fn leading_type_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\{.*?\}").unwrap())
}

/// `[name]` or `[name=default]` at the start of a token
fn name_span_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\[.*?\]").unwrap())
}

/// Leading version token followed by a space and the remaining text
fn deprecation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)^(?P<version>v?[0-9]+(?:\.[0-9a-z.]+)*) (?P<desc>.+)").unwrap()
    })
}

/// Strip the one-character delimiters of a matched span
fn span_inner(span: &str) -> &str {
    &span[1..span.len() - 1]
}

/// Fields collected while scanning the name-bearing tokens of a param tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ParamFields {
    arg_name: Option<String>,
    type_name: Option<String>,
    is_optional: bool,
    default: Option<String>,
}

impl ParamFields {
    /// Fold one token in. `{...}` is checked before `[...]`, so a token
    /// carrying both only contributes its type.
    fn scan(self, token: &str) -> Self {
        if let Some(span) = type_span_regex().find(token) {
            let inner = span_inner(span.as_str());
            return match inner.strip_suffix('=') {
                Some(type_name) => ParamFields {
                    type_name: Some(type_name.to_string()),
                    is_optional: true,
                    ..self
                },
                None => ParamFields {
                    type_name: Some(inner.to_string()),
                    ..self
                },
            };
        }

        if let Some(span) = name_span_regex().find(token) {
            let inner = span_inner(span.as_str());
            return match inner.split_once('=') {
                Some((name, default)) => ParamFields {
                    arg_name: Some(name.to_string()),
                    default: Some(default.to_string()),
                    is_optional: true,
                    ..self
                },
                None => ParamFields {
                    arg_name: Some(inner.to_string()),
                    is_optional: true,
                    ..self
                },
            };
        }

        ParamFields {
            arg_name: Some(token.to_string()),
            ..self
        }
    }
}

/// Last `{type}` found at the start of the argument tokens
fn leading_type(args: &[String]) -> Option<String> {
    args.iter().skip(1).fold(None, |found, token| {
        match leading_type_regex().find(token) {
            Some(span) => Some(span_inner(span.as_str()).to_string()),
            None => found,
        }
    })
}

/// Build the metadata record for one tag.
pub fn build_meta(tag: TagChunk) -> Result<DocstringMeta, ParseError> {
    let TagChunk {
        kind,
        args,
        description,
    } = tag;

    let meta = match kind {
        TagKind::Param => {
            let names = args.get(1..).unwrap_or_default();
            if !(2..=3).contains(&names.len()) {
                let name = args.first().map(String::as_str).unwrap_or_default();
                return Err(ParseError::new(
                    name,
                    &args.join(" "),
                    "two or three arguments",
                ));
            }
            let fields = names
                .iter()
                .fold(ParamFields::default(), |fields, token| fields.scan(token));
            DocstringMeta::Param(DocstringParam {
                args,
                description,
                arg_name: fields.arg_name,
                type_name: fields.type_name,
                is_optional: fields.is_optional,
                default: fields.default,
            })
        }
        TagKind::Returns | TagKind::Yields => DocstringMeta::Returns(DocstringReturns {
            type_name: leading_type(&args),
            is_generator: kind == TagKind::Yields,
            args,
            description,
        }),
        TagKind::Deprecation => {
            let parsed = deprecation_regex()
                .captures(&description)
                .map(|caps| (caps["version"].to_string(), caps["desc"].to_string()));
            let (version, description) = match parsed {
                Some((version, rest)) => (Some(version), rest),
                None => (None, description),
            };
            DocstringMeta::Deprecated(DocstringDeprecated {
                args,
                description,
                version,
            })
        }
        TagKind::Raises => DocstringMeta::Raises(DocstringRaises {
            type_name: leading_type(&args),
            args,
            description,
        }),
        TagKind::Other => DocstringMeta::Tag(DocstringTag { args, description }),
    };

    Ok(meta)
}
