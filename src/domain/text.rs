//! Whitespace helpers shared by the segmenter and the tag interpreter

const TAB_SIZE: usize = 8;

/// Expand tabs to spaces on 8-column stops
fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Normalize docstring indentation.
///
/// Tabs are expanded, the first line loses its leading whitespace, the
/// common margin of the remaining non-blank lines is removed, and leading
/// and trailing empty lines are dropped.
pub fn cleandoc(text: &str) -> String {
    let expanded = expand_tabs(text);
    let mut lines: Vec<String> = expanded.split('\n').map(str::to_string).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start();
            if content.is_empty() {
                None
            } else {
                Some(line.chars().count() - content.chars().count())
            }
        })
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.chars().skip(margin).collect();
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let start = lines
        .iter()
        .position(|line| !line.is_empty())
        .unwrap_or(lines.len());

    lines[start..].join("\n")
}

/// Split on runs of whitespace, at most `max_splits` times.
///
/// Leading whitespace is skipped; the last field keeps the untouched
/// remainder (inner newlines included). An empty or blank input has no
/// fields.
pub fn split_fields(text: &str, max_splits: usize) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        if fields.len() == max_splits {
            fields.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(end) => {
                fields.push(&rest[..end]);
                rest = rest[end..].trim_start();
            }
            None => {
                fields.push(rest);
                break;
            }
        }
    }

    fields
}

/// Trim a tag description and de-indent its continuation lines,
/// leaving the first line as written.
pub fn normalize_description(text: &str) -> String {
    let text = text.trim();
    match text.split_once('\n') {
        Some((first, rest)) => format!("{}\n{}", first, cleandoc(rest)),
        None => text.to_string(),
    }
}
