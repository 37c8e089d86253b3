//! Output formatting utilities

use crate::application::ParsedDoc;
use crate::domain::{Docstring, DocstringMeta};
use crate::error::Result;
use crate::infrastructure::Config;

/// Render parsed docstrings as a pretty-printed JSON array
pub fn format_json(docs: &[ParsedDoc]) -> Result<String> {
    let mut output = serde_json::to_string_pretty(docs)?;
    output.push('\n');
    Ok(output)
}

/// Render parsed docstrings as a human-readable report
pub fn format_text(docs: &[ParsedDoc]) -> String {
    let mut output = String::new();
    for (i, doc) in docs.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("== {} ==\n", doc.source));
        output.push_str(&format_docstring(&doc.docstring));
    }
    output
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}", line).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one docstring: descriptions first, then one line per tag
pub fn format_docstring(doc: &Docstring) -> String {
    let mut output = String::new();

    if let Some(short) = &doc.short_description {
        output.push_str(&format!("summary: {}\n", short));
    }
    if let Some(long) = &doc.long_description {
        output.push_str("description:\n");
        output.push_str(&indent(long));
        output.push('\n');
    }

    for meta in &doc.meta {
        output.push_str(&format_meta(meta));
        output.push('\n');
        if !meta.description().is_empty() {
            output.push_str(&indent(meta.description()));
            output.push('\n');
        }
    }

    output
}

fn format_meta(meta: &DocstringMeta) -> String {
    let mut line = format!("@{}", meta.tag());
    match meta {
        DocstringMeta::Param(p) => {
            if let Some(name) = &p.arg_name {
                line.push_str(&format!(" {}", name));
            }
            if let Some(type_name) = &p.type_name {
                line.push_str(&format!(" <{}>", type_name));
            }
            if p.is_optional {
                line.push_str(" (optional)");
            }
            if let Some(default) = &p.default {
                line.push_str(&format!(" = {}", default));
            }
        }
        DocstringMeta::Returns(r) => {
            if let Some(type_name) = &r.type_name {
                line.push_str(&format!(" <{}>", type_name));
            }
            if r.is_generator {
                line.push_str(" (generator)");
            }
        }
        DocstringMeta::Raises(r) => {
            if let Some(type_name) = &r.type_name {
                line.push_str(&format!(" <{}>", type_name));
            }
        }
        DocstringMeta::Deprecated(d) => {
            if let Some(version) = &d.version {
                line.push_str(&format!(" since {}", version));
            }
        }
        DocstringMeta::Tag(t) => {
            for arg in t.args.iter().skip(1).filter(|a| !a.is_empty()) {
                line.push_str(&format!(" {}", arg));
            }
        }
    }
    line
}

/// Format a list of tag names for display
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("@{}\n", tag));
    }

    output
}

/// Format the effective configuration, one `key = value` per line
pub fn format_config(config: &Config) -> String {
    format!(
        "format = {}\nextensions = {}\nstrict = {}\n",
        config.format,
        config.extensions.join(","),
        config.strict
    )
}
