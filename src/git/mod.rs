//! Git tag access
//!
//! The [Repository] trait is the only seam the version rules need from git:
//! a listing of tags. Two implementations exist:
//!
//! - [repository::Git2Repository]: a real repository opened with the `git2` crate
//! - [mock::MockRepository]: an in-memory tag list for tests
//!
//! ```rust
//! # use gitflow_version::git::Repository;
//! # use gitflow_version::domain::TagPattern;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let found = gitflow_version::git::latest_release(repo, &TagPattern::bare())?;
//! if let Some(latest) = found.latest {
//!     println!("latest release: {}", latest.version());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{find_latest, LatestRelease, TagPattern};
use crate::error::Result;
use git2::Oid;

/// A tag name and the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub target: Oid,
}

/// Common git operation trait for abstraction
///
/// All implementors must be `Send + Sync` to allow sharing across threads.
pub trait Repository: Send + Sync {
    /// Get all tags in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<TagRef>)` - Tags sorted by name
    /// * `Err` - If there's a Git error
    fn list_tags(&self) -> Result<Vec<TagRef>>;
}

/// Highest-versioned tag of a repository
pub fn latest_release<R: Repository + ?Sized>(
    repo: &R,
    pattern: &TagPattern,
) -> Result<LatestRelease<TagRef>> {
    let tags = repo.list_tags()?;
    Ok(find_latest(tags, pattern, |tag| tag.name.as_str()))
}
