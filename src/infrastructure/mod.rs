//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod source;

pub use config::{Config, OutputFormat};
pub use source::{FileSystemSource, MemorySource, SourceInput, SourceRepository, StdinSource};
