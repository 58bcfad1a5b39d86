use crate::error::{Result, VersionError};
use crate::git::TagRef;
use git2::Repository as Git2Repo;
use std::path::Path;
use std::sync::Mutex;

/// Wrapper around git2::Repository with our trait interface
///
/// libgit2 handles are `Send` but not `Sync`, hence the mutex.
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<TagRef>> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| VersionError::tag("Repository handle poisoned"))?;
        let names = repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = repo.find_reference(&format!("refs/tags/{}", name))?;
            let target = reference
                .peel(git2::ObjectType::Any)
                .map_err(|e| VersionError::tag(format!("Cannot peel tag '{}': {}", name, e)))?
                .id();

            tags.push(TagRef {
                name: name.to_string(),
                target,
            });
        }

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}

