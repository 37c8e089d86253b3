//! Error types for jsdoc

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the parsing core: a tag whose arguments do not split into
/// the field count its grammar requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected} for a \"{tag}\" keyword near \"{chunk}\"")]
pub struct ParseError {
    /// Tag name without the leading `@`
    pub tag: String,
    /// Raw chunk the tag was read from
    pub chunk: String,
    /// Human readable arity, e.g. "two or three arguments"
    pub expected: String,
}

impl ParseError {
    pub fn new(tag: &str, chunk: &str, expected: &str) -> Self {
        ParseError {
            tag: tag.to_string(),
            chunk: chunk.trim_end().to_string(),
            expected: expected.to_string(),
        }
    }
}

/// Main error type for the jsdoc tool
#[derive(Debug, Error)]
pub enum JsdocError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to parse {source_name}: {error}")]
    Input {
        source_name: String,
        error: ParseError,
    },

    #[error("{0} input(s) failed to parse")]
    Failures(usize),

    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JsdocError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JsdocError::Parse(_) | JsdocError::Input { .. } | JsdocError::Failures(_) => 2,
            JsdocError::InputNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JsdocError::Parse(err) | JsdocError::Input { error: err, .. } => {
                format!(
                    "{}\n\n\
                    Expected tag layouts:\n\
                    • @{} {{Type}} name description\n\
                    • @{} {{Type}} [name=default] description\n\
                    • @return {{Type}} description",
                    self, err.tag, err.tag
                )
            }
            JsdocError::InputNotFound(path) => {
                format!(
                    "Input not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path spelling\n\
                    • Omit paths to read a docstring from stdin",
                    path.display()
                )
            }
            JsdocError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: format, extensions, strict\n\
                        Example: jsdoc config format json",
                        msg
                    )
                } else if msg.contains("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: text, json\n\
                        Example: jsdoc parse --format json docs/",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JsdocError
pub type Result<T> = std::result::Result<T, JsdocError>;
