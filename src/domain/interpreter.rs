//! Per-tag argument grammar: turns a raw `@tag ...` chunk into tokens

use super::keywords::{Grammar, TagKind};
use super::text::{normalize_description, split_fields};
use crate::error::ParseError;

/// Tag name, argument tokens and description read from one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChunk {
    pub kind: TagKind,
    /// Tag name first, then the grammar's argument tokens
    pub args: Vec<String>,
    pub description: String,
}

/// Interpret a raw chunk beginning with `@`.
pub fn interpret(chunk: &str) -> Result<TagChunk, ParseError> {
    let head = split_fields(chunk, 1);
    let (raw_tag, rest) = match head.as_slice() {
        [tag] => (*tag, ""),
        [tag, rest] => (*tag, *rest),
        _ => ("", ""),
    };
    let tag = raw_tag.trim_matches('@');
    let kind = TagKind::of(tag);

    let (args, description) = match Grammar::of(tag) {
        Grammar::Named => match split_fields(rest, 2).as_slice() {
            [placeholder, args_chunk, description] => (
                vec![tag.to_string(), placeholder.to_string(), args_chunk.to_string()],
                *description,
            ),
            [placeholder, args_chunk] => (
                vec![tag.to_string(), placeholder.to_string(), args_chunk.to_string()],
                "",
            ),
            _ => return Err(ParseError::new(tag, chunk, "two or three arguments")),
        },
        Grammar::Typed => match split_fields(rest, 1).as_slice() {
            [args_chunk, description] => {
                (vec![tag.to_string(), args_chunk.to_string()], *description)
            }
            [args_chunk] => (vec![tag.to_string(), args_chunk.to_string()], ""),
            _ => (vec![tag.to_string(), String::new()], ""),
        },
        Grammar::Free => (vec![tag.to_string()], rest),
    };

    Ok(TagChunk {
        kind,
        args,
        description: normalize_description(description),
    })
}
