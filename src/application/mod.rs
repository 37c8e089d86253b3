//! Application layer - Use cases and orchestration

pub mod list_tags;
pub mod manage_config;
pub mod parse_docs;

pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use parse_docs::{FailedDoc, ParseReport, ParseService, ParsedDoc};
