//! Top-level docstring parsing
//!
//! # Examples
//!
//! ```
//! use jsdoc::domain::parse;
//!
//! let doc = parse("Adds numbers.\n\n@param {number} a first\n@return {number} sum").unwrap();
//! assert_eq!(doc.short_description.as_deref(), Some("Adds numbers."));
//! assert_eq!(doc.meta.len(), 2);
//! ```

use super::builder::build_meta;
use super::docstring::{Docstring, DocstringStyle};
use super::interpreter::interpret;
use super::segmenter::segment;
use super::text::{cleandoc, split_fields};
use crate::error::ParseError;

/// Parse a JSDoc-style docstring.
///
/// The text is indentation-normalized first; comment delimiters (`/**`,
/// leading `*`) must already be stripped. Any tag whose arguments do not
/// fit its grammar aborts the whole parse.
pub fn parse(text: &str) -> Result<Docstring, ParseError> {
    let text = cleandoc(text);
    let segments = segment(&text);

    let meta = segments
        .chunks
        .iter()
        .map(|chunk| interpret(chunk).and_then(build_meta))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Docstring {
        style: DocstringStyle::JsDoc,
        short_description: segments.short_description,
        long_description: segments.long_description,
        blank_after_short_description: segments.blank_after_short_description,
        blank_after_long_description: segments.blank_after_long_description,
        meta,
    })
}

/// Names of the tags in a docstring, in source order.
///
/// Tag arguments are not interpreted, so tags that would fail [`parse`]
/// are still listed.
pub fn tag_names(text: &str) -> Vec<String> {
    let text = cleandoc(text);
    segment(&text)
        .chunks
        .iter()
        .filter_map(|chunk| split_fields(chunk, 1).first().map(|tag| tag.trim_matches('@').to_string()))
        .collect()
}
