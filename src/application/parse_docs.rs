//! Parse docstrings use case

use crate::domain::{parse, Docstring};
use crate::error::{JsdocError, ParseError, Result};
use crate::infrastructure::SourceRepository;
use serde::Serialize;

/// A successfully parsed input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub source: String,
    pub docstring: Docstring,
}

/// An input that failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDoc {
    pub source: String,
    pub error: ParseError,
}

/// Results of one run over a source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub parsed: Vec<ParsedDoc>,
    pub failures: Vec<FailedDoc>,
}

/// Service for parsing every docstring a repository provides
pub struct ParseService<R: SourceRepository> {
    repository: R,
    strict: bool,
}

impl<R: SourceRepository> ParseService<R> {
    /// Create a new parse service. In strict mode the first failure aborts
    /// the run; otherwise failures are collected in the report.
    pub fn new(repository: R, strict: bool) -> Self {
        Self { repository, strict }
    }

    pub fn execute(&self) -> Result<ParseReport> {
        let mut report = ParseReport::default();

        for input in self.repository.inputs()? {
            match parse(&input.text) {
                Ok(docstring) => report.parsed.push(ParsedDoc {
                    source: input.name,
                    docstring,
                }),
                Err(error) if self.strict => {
                    return Err(JsdocError::Input {
                        source_name: input.name,
                        error,
                    });
                }
                Err(error) => report.failures.push(FailedDoc {
                    source: input.name,
                    error,
                }),
            }
        }

        Ok(report)
    }
}
