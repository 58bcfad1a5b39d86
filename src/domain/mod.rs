//! Domain logic - pure version rules independent of git operations

pub mod artifact;
pub mod comparator;
pub mod deriver;
pub mod formatter;
pub mod grammar;
pub mod tag;
pub mod version;

pub use comparator::{compare, compare_str};
pub use grammar::{parse, SNAPSHOT_IDENTIFIER};
pub use tag::{find_latest, LatestRelease, TagPattern, TaggedVersion};
pub use version::{Components, HotfixVersion, ReleaseVersion, VersionForm, VersionValue};
