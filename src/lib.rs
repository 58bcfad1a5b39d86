pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use domain::{HotfixVersion, ReleaseVersion, TaggedVersion, VersionValue};
pub use error::{Result, VersionError};
