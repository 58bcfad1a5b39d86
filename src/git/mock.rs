use crate::error::Result;
use crate::git::{Repository, TagRef};
use git2::Oid;
use std::collections::BTreeMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: BTreeMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: BTreeMap::new(),
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        Ok(self
            .tags
            .iter()
            .map(|(name, oid)| TagRef {
                name: name.clone(),
                target: *oid,
            })
            .collect())
    }
}
