//! Parsed version values and the two capability variants built on them
//!
//! [`VersionValue`] is the immutable result of the grammar. [`ReleaseVersion`]
//! only parses, compares and formats; [`HotfixVersion`] adds the derivations
//! used when cutting release and hotfix branches.

use crate::domain::{comparator, deriver, formatter, grammar};
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fields of a digit-led version such as `1.0.1-rc-2-b5`
///
/// Every token keeps its original text, so `"01"` stays `"01"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Components {
    /// Dot separated numeric groups, most significant first
    pub digits: Vec<String>,
    pub annotation_separator: Option<char>,
    /// Alphabetic qualifier such as `rc` or `beta`
    pub annotation: Option<String>,
    pub annotation_rev_separator: Option<char>,
    /// Token following the annotation (`2` in `rc-2`)
    pub annotation_revision: Option<String>,
    pub build_separator: Option<char>,
    /// Trailing free-form token, or the `SNAPSHOT` marker
    pub build_specifier: Option<String>,
}

/// Shape of a parsed version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionForm {
    /// Digit-led version
    Standard(Components),
    /// Build-only marker without digits (`SNAPSHOT`, `trunk-SNAPSHOT`)
    BuildOnly,
}

/// Immutable structured version
///
/// Keeps the source string next to its decomposition; the comparator works
/// on the source string and the formatter rebuilds it from the fields.
#[derive(Debug, Clone)]
pub struct VersionValue {
    raw: String,
    form: VersionForm,
}

impl VersionValue {
    pub(crate) fn new(raw: impl Into<String>, form: VersionForm) -> Self {
        VersionValue {
            raw: raw.into(),
            form,
        }
    }

    /// Parse a version string
    pub fn parse(version: &str) -> Result<Self> {
        grammar::parse(version)
    }

    /// Build a value from components; the rendered string becomes its source
    pub fn from_components(components: Components) -> Self {
        let raw = formatter::format_components(&components);
        VersionValue::new(raw, VersionForm::Standard(components))
    }

    /// The source string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn form(&self) -> &VersionForm {
        &self.form
    }

    pub fn components(&self) -> Option<&Components> {
        match &self.form {
            VersionForm::Standard(components) => Some(components),
            VersionForm::BuildOnly => None,
        }
    }

    pub fn is_build_only(&self) -> bool {
        matches!(self.form, VersionForm::BuildOnly)
    }

    /// Digit groups, absent for build-only values
    pub fn digits(&self) -> Option<&[String]> {
        self.components().map(|c| c.digits.as_slice())
    }

    pub fn annotation_separator(&self) -> Option<char> {
        self.components().and_then(|c| c.annotation_separator)
    }

    pub fn annotation(&self) -> Option<&str> {
        self.components().and_then(|c| c.annotation.as_deref())
    }

    pub fn annotation_rev_separator(&self) -> Option<char> {
        self.components().and_then(|c| c.annotation_rev_separator)
    }

    pub fn annotation_revision(&self) -> Option<&str> {
        self.components()
            .and_then(|c| c.annotation_revision.as_deref())
    }

    pub fn build_separator(&self) -> Option<char> {
        self.components().and_then(|c| c.build_separator)
    }

    /// Build specifier; a build-only value is its own build specifier
    pub fn build_specifier(&self) -> Option<&str> {
        match &self.form {
            VersionForm::Standard(components) => components.build_specifier.as_deref(),
            VersionForm::BuildOnly => Some(&self.raw),
        }
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionValue {
    type Err = crate::error::VersionError;

    fn from_str(s: &str) -> Result<Self> {
        grammar::parse(s)
    }
}

impl PartialEq for VersionValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionValue {}

impl PartialOrd for VersionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering through [`comparator::compare`]
///
/// The prefix rule is not transitive for mixed inputs: `1-beta < 1`,
/// `1 < 1.0-alpha` and `1.0-alpha < 1-beta`. Sorting or keying a `BTreeSet`
/// on such a set can give inconsistent results; use a linear max instead.
impl Ord for VersionValue {
    fn cmp(&self, other: &Self) -> Ordering {
        comparator::compare(self, other)
    }
}

macro_rules! version_variant {
    ($name:ident) => {
        impl $name {
            /// Parse a version string
            pub fn parse(version: &str) -> Result<Self> {
                grammar::parse(version).map($name)
            }

            /// The shared read-only value
            pub fn value(&self) -> &VersionValue {
                &self.0
            }

            pub fn into_value(self) -> VersionValue {
                self.0
            }

            /// Canonical string rebuilt from the parsed fields
            pub fn format(&self) -> String {
                formatter::format(&self.0)
            }
        }

        impl From<VersionValue> for $name {
            fn from(value: VersionValue) -> Self {
                $name(value)
            }
        }

        impl AsRef<VersionValue> for $name {
            fn as_ref(&self) -> &VersionValue {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = crate::error::VersionError;

            fn from_str(s: &str) -> Result<Self> {
                $name::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.cmp(&other.0)
            }
        }
    };
}

/// Version that can only be parsed, compared and formatted
#[derive(Debug, Clone)]
pub struct ReleaseVersion(VersionValue);

version_variant!(ReleaseVersion);

impl ReleaseVersion {
    /// Upgrade to a value that supports derivations
    pub fn into_hotfix(self) -> HotfixVersion {
        HotfixVersion(self.0)
    }
}

/// Version supporting next/hotfix/snapshot derivations
///
/// Derivations never touch `self`; each returns a fresh value or string.
#[derive(Debug, Clone)]
pub struct HotfixVersion(VersionValue);

version_variant!(HotfixVersion);

impl HotfixVersion {
    /// Assemble a version from its parts
    pub fn from_parts(components: Components) -> Self {
        HotfixVersion(VersionValue::from_components(components))
    }

    /// Next version: bumps the annotation revision, or the last digit group
    pub fn next_version(&self) -> Result<HotfixVersion> {
        deriver::next_version(&self.0).map(HotfixVersion)
    }

    /// Version of a new hotfix branch cut from this one
    pub fn hotfix_version_string(&self) -> Result<String> {
        deriver::hotfix_version(&self.0)
    }

    /// Version that would have preceded this one on the hotfix line
    pub fn decremented_hotfix_version_string(&self) -> Result<String> {
        deriver::decremented_hotfix_version(&self.0)
    }

    pub fn is_snapshot(&self) -> bool {
        deriver::is_snapshot(&self.0)
    }

    pub fn release_version_string(&self) -> String {
        deriver::release_version_string(&self.0)
    }

    pub fn snapshot_version_string(&self) -> String {
        deriver::snapshot_version_string(&self.0)
    }
}

impl From<ReleaseVersion> for HotfixVersion {
    fn from(version: ReleaseVersion) -> Self {
        version.into_hotfix()
    }
}
