use crate::boundary::BoundaryWarning;
use crate::domain::version::{ReleaseVersion, VersionValue};
use crate::error::{Result, VersionError};
use std::cmp::Ordering;
use tracing::warn;

const VERSION_PLACEHOLDER: &str = "{version}";

/// A version paired with the tag it was read from
///
/// The tag handle is opaque here; ordering looks at the version only.
#[derive(Debug, Clone)]
pub struct TaggedVersion<T> {
    version: ReleaseVersion,
    tag: T,
}

impl<T> TaggedVersion<T> {
    /// Parse `version` and attach `tag`
    pub fn new(version: &str, tag: T) -> Result<Self> {
        Ok(TaggedVersion {
            version: ReleaseVersion::parse(version)?,
            tag,
        })
    }

    pub fn version(&self) -> &VersionValue {
        self.version.value()
    }

    pub fn tag(&self) -> &T {
        &self.tag
    }

    pub fn into_tag(self) -> T {
        self.tag
    }
}

impl<T> PartialEq for TaggedVersion<T> {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}

impl<T> Eq for TaggedVersion<T> {}

impl<T> PartialOrd for TaggedVersion<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Same caveat as the `Ord` impl of [`VersionValue`]: not transitive for
/// every input, so prefer a linear max over sorting.
impl<T> Ord for TaggedVersion<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version.cmp(&other.version)
    }
}

/// Tag naming pattern (e.g., "{version}", "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    prefix: String,
    suffix: String,
}

impl TagPattern {
    /// Create a tag pattern; it must contain exactly one `{version}` placeholder
    pub fn new(pattern: &str) -> Result<Self> {
        let mut parts = pattern.split(VERSION_PLACEHOLDER);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(prefix), Some(suffix), None) => Ok(TagPattern {
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            }),
            _ => Err(VersionError::tag(format!(
                "Pattern '{}' must contain exactly one {} placeholder",
                pattern, VERSION_PLACEHOLDER
            ))),
        }
    }

    /// Pattern taking tags as bare versions
    pub fn bare() -> Self {
        TagPattern {
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        format!("{}{}{}", self.prefix, version, self.suffix)
    }

    /// Version part of a tag name, or `None` when the tag does not fit the pattern
    pub fn version_part<'a>(&self, tag: &'a str) -> Option<&'a str> {
        tag.strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())
            .filter(|version| !version.is_empty())
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::bare()
    }
}

impl std::fmt::Display for TagPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.prefix, VERSION_PLACEHOLDER, self.suffix)
    }
}

/// Outcome of scanning a set of tags for the latest release
#[derive(Debug)]
pub struct LatestRelease<T> {
    pub latest: Option<TaggedVersion<T>>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Pick the highest-versioned tag
///
/// `name` yields the tag name of each handle. Tags outside the pattern or
/// with an unparsable version are skipped and reported as warnings. The scan
/// keeps a running max and never sorts, as the version order is not
/// transitive for every input.
pub fn find_latest<T, I, F>(tags: I, pattern: &TagPattern, name: F) -> LatestRelease<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> &str,
{
    let mut latest: Option<TaggedVersion<T>> = None;
    let mut warnings = Vec::new();

    for tag in tags {
        let tag_name = name(&tag).to_string();

        let Some(version) = pattern.version_part(&tag_name) else {
            warnings.push(BoundaryWarning::TagMismatchPattern {
                tag: tag_name,
                pattern: pattern.to_string(),
            });
            continue;
        };

        match TaggedVersion::new(version, tag) {
            Ok(candidate) => {
                if latest.as_ref().map_or(true, |current| candidate > *current) {
                    latest = Some(candidate);
                }
            }
            Err(e) => {
                warn!(tag = %tag_name, error = %e, "skipping tag");
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag: tag_name,
                    reason: e.to_string(),
                });
            }
        }
    }

    LatestRelease { latest, warnings }
}
