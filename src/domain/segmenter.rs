//! Splits docstring text into free-text description and per-tag chunks

use regex::Regex;
use std::sync::OnceLock;

/// Matches a line starting with `@`
fn tag_line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^@").unwrap())
}

/// Description fields and raw tag chunks of one docstring
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments<'a> {
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub blank_after_short_description: bool,
    pub blank_after_long_description: bool,
    /// One chunk per tag, each starting with `@`, in source order
    pub chunks: Vec<&'a str>,
}

/// Segment normalized docstring text.
pub fn segment(text: &str) -> Segments<'_> {
    let starts: Vec<usize> = tag_line_regex()
        .find_iter(text)
        .map(|m| m.start())
        .collect();

    let meta_start = starts.first().copied().unwrap_or(text.len());
    let (desc_chunk, _) = text.split_at(meta_start);

    let mut segments = Segments::default();

    let (short, remainder) = match desc_chunk.split_once('\n') {
        Some((short, rest)) => (short, Some(rest)),
        None => (desc_chunk, None),
    };
    if !short.is_empty() {
        segments.short_description = Some(short.to_string());
    }
    if let Some(long_chunk) = remainder {
        segments.blank_after_short_description = long_chunk.starts_with('\n');
        segments.blank_after_long_description = long_chunk.ends_with("\n\n");
        let long = long_chunk.trim();
        if !long.is_empty() {
            segments.long_description = Some(long.to_string());
        }
    }

    segments.chunks = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .collect();

    segments
}
