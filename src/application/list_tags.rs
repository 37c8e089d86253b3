//! List tags use case

use crate::domain::tag_names;
use crate::error::Result;
use crate::infrastructure::SourceRepository;
use std::collections::BTreeSet;

/// Service for listing the distinct tag names used across inputs
pub struct ListTagsService<R: SourceRepository> {
    repository: R,
}

impl<R: SourceRepository> ListTagsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Sorted, deduplicated tag names
    pub fn execute(&self) -> Result<Vec<String>> {
        let mut tags = BTreeSet::new();
        for input in self.repository.inputs()? {
            tags.extend(tag_names(&input.text));
        }
        Ok(tags.into_iter().collect())
    }
}
