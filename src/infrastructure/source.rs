//! Docstring input sources

use crate::error::{JsdocError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name reported for text read from standard input
pub const STDIN_NAME: &str = "<stdin>";

/// One docstring to parse, with the name it is reported under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    pub name: String,
    pub text: String,
}

impl SourceInput {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        SourceInput {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Abstract provider of docstring inputs
pub trait SourceRepository {
    /// Load every input, in a deterministic order
    fn inputs(&self) -> Result<Vec<SourceInput>>;
}

impl<R: SourceRepository + ?Sized> SourceRepository for Box<R> {
    fn inputs(&self) -> Result<Vec<SourceInput>> {
        (**self).inputs()
    }
}

/// Files and directories on disk
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    paths: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl FileSystemSource {
    /// Create a source over explicit files and directories. Directories are
    /// walked recursively, keeping files whose extension is listed.
    pub fn new(paths: Vec<PathBuf>, extensions: Vec<String>) -> Self {
        FileSystemSource { paths, extensions }
    }

    fn has_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Resolve the configured paths to a sorted list of files
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                // Explicit files are taken regardless of extension
                files.push(path.clone());
            } else if path.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(path)
                    .into_iter()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.file_type().is_file())
                    .map(|entry| entry.into_path())
                    .filter(|p| self.has_extension(p))
                    .collect();
                found.sort();
                files.extend(found);
            } else {
                return Err(JsdocError::InputNotFound(path.clone()));
            }
        }

        // A file named explicitly and reached through a directory is read once
        let mut seen = BTreeSet::new();
        files.retain(|path| seen.insert(path.clone()));
        Ok(files)
    }
}

impl SourceRepository for FileSystemSource {
    fn inputs(&self) -> Result<Vec<SourceInput>> {
        self.collect_files()?
            .into_iter()
            .map(|path| {
                let text = fs::read_to_string(&path)?;
                Ok(SourceInput::new(path.display().to_string(), text))
            })
            .collect()
    }
}

/// A single docstring read from standard input
#[derive(Debug, Clone, Default)]
pub struct StdinSource;

impl SourceRepository for StdinSource {
    fn inputs(&self) -> Result<Vec<SourceInput>> {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(vec![SourceInput::new(STDIN_NAME, text)])
    }
}

/// Inputs held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    inputs: Vec<SourceInput>,
}

impl MemorySource {
    pub fn new(inputs: Vec<SourceInput>) -> Self {
        MemorySource { inputs }
    }
}

impl SourceRepository for MemorySource {
    fn inputs(&self) -> Result<Vec<SourceInput>> {
        Ok(self.inputs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn extensions() -> Vec<String> {
        vec!["jsdoc".to_string()]
    }

    #[test]
    fn test_collects_explicit_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.md");
        fs::write(&file, "Summary.").unwrap();

        let source = FileSystemSource::new(vec![file.clone()], extensions());
        assert_eq!(source.collect_files().unwrap(), vec![file]);
    }

    #[test]
    fn test_walks_directory_filtered_and_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("b.jsdoc"), "B").unwrap();
        fs::write(temp.path().join("a.jsdoc"), "A").unwrap();
        fs::write(temp.path().join("skip.rs"), "fn main() {}").unwrap();
        fs::write(temp.path().join("nested").join("c.JSDOC"), "C").unwrap();

        let source = FileSystemSource::new(vec![temp.path().to_path_buf()], extensions());
        let inputs = source.inputs().unwrap();

        let texts: Vec<&str> = inputs.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_file_listed_twice_is_read_once() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.jsdoc");
        fs::write(&file, "A").unwrap();
        fs::write(temp.path().join("b.jsdoc"), "B").unwrap();

        let source = FileSystemSource::new(
            vec![file.clone(), temp.path().to_path_buf()],
            extensions(),
        );
        let files = source.collect_files().unwrap();
        assert_eq!(files, vec![file, temp.path().join("b.jsdoc")]);
    }

    #[test]
    fn test_missing_path_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.jsdoc");

        let source = FileSystemSource::new(vec![missing.clone()], extensions());
        match source.collect_files().unwrap_err() {
            JsdocError::InputNotFound(path) => assert_eq!(path, missing),
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new(vec![SourceInput::new("a", "text")]);
        assert_eq!(source.inputs().unwrap()[0].name, "a");
    }
}
