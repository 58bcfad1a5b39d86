//! Version string grammar
//!
//! Two patterns are tried in order. The alternate pattern accepts build-only
//! markers (`SNAPSHOT`, `trunk-SNAPSHOT`); the standard pattern accepts
//! digit-led versions of the shape
//! `digits(.digits)* [sep][letters] [sep][digits] [sep][rest]`.

use crate::domain::version::{Components, VersionForm, VersionValue};
use crate::error::{Result, VersionError};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::debug;

/// Reserved build marker for in-development versions
pub const SNAPSHOT_IDENTIFIER: &str = "SNAPSHOT";

/// Separator between digit groups
pub const DIGIT_SEPARATOR: char = '.';

static ALTERNATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:SNAPSHOT|[a-zA-Z]+[-_]SNAPSHOT)$").expect("Invalid alternate version regex")
});

static STANDARD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<digits>(?:[0-9]+\.)*[0-9]+)",
        r"(?P<annotation_sep>[-_])?",
        r"(?P<annotation>[a-zA-Z]*)",
        r"(?P<rev_sep>[-_])?",
        r"(?P<revision>[0-9]*)",
        r"(?:(?P<build_sep>[-_])?(?P<build>.*?))?$",
    ))
    .expect("Invalid standard version regex")
});

/// Raw captures of the standard pattern, empty captures already dropped
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StandardMatch<'a> {
    pub digits: &'a str,
    pub annotation_separator: Option<char>,
    pub annotation: Option<&'a str>,
    pub annotation_rev_separator: Option<char>,
    pub annotation_revision: Option<&'a str>,
    pub build_separator: Option<char>,
    pub build_specifier: Option<&'a str>,
}

/// Which pattern accepted the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarMatch<'a> {
    /// Build-only marker
    Alternate,
    Standard(StandardMatch<'a>),
}

/// Run both patterns against `version`, alternate first
pub fn match_version(version: &str) -> Option<GrammarMatch<'_>> {
    if ALTERNATE_PATTERN.is_match(version) {
        return Some(GrammarMatch::Alternate);
    }

    STANDARD_PATTERN
        .captures(version)
        .map(|caps| GrammarMatch::Standard(StandardMatch::from_captures(&caps)))
}

/// Parse a version string into its structured form
pub fn parse(version: &str) -> Result<VersionValue> {
    match match_version(version) {
        Some(GrammarMatch::Alternate) => {
            debug!(version, "parsed build-only version");
            Ok(VersionValue::new(version, VersionForm::BuildOnly))
        }
        Some(GrammarMatch::Standard(m)) => {
            let components = m.into_components();
            debug!(version, ?components, "parsed version");
            Ok(VersionValue::new(version, VersionForm::Standard(components)))
        }
        None => Err(VersionError::parse(version)),
    }
}

impl<'a> StandardMatch<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let text = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };
        let separator = |name: &str| text(name).and_then(|s| s.chars().next());

        StandardMatch {
            digits: caps.name("digits").map_or("", |m| m.as_str()),
            annotation_separator: separator("annotation_sep"),
            annotation: text("annotation"),
            annotation_rev_separator: separator("rev_sep"),
            annotation_revision: text("revision"),
            build_separator: separator("build_sep"),
            build_specifier: text("build"),
        }
    }

    /// Assign captures to fields, resolving the two ambiguous shapes
    pub fn into_components(self) -> Components {
        let digits = split_digits(self.digits);

        if self.annotation == Some(SNAPSHOT_IDENTIFIER) {
            // "1.0-SNAPSHOT": the marker is a build specifier, not an annotation
            return Components {
                digits,
                build_separator: self.annotation_separator,
                build_specifier: Some(SNAPSHOT_IDENTIFIER.to_string()),
                ..Components::default()
            };
        }

        let mut components = Components {
            digits,
            annotation_separator: self.annotation_separator,
            annotation: self.annotation.map(str::to_string),
            ..Components::default()
        };

        if self.annotation_rev_separator.is_some() && self.annotation_revision.is_none() {
            // A separator with no revision after it is the build separator
            debug!(digits = self.digits, "revision separator reassigned to build");
            components.build_separator = self.annotation_rev_separator;
            components.build_specifier = self.build_specifier.map(str::to_string);
        } else {
            components.annotation_rev_separator = self.annotation_rev_separator;
            components.annotation_revision = self.annotation_revision.map(str::to_string);
            components.build_separator = self.build_separator;
            components.build_specifier = self.build_specifier.map(str::to_string);
        }

        // A separator with nothing after it is not kept
        if components.annotation.is_none() && components.annotation_revision.is_none() {
            components.annotation_separator = None;
        }
        if components.build_specifier.is_none() {
            components.build_separator = None;
        }

        components
    }
}

fn split_digits(digits: &str) -> Vec<String> {
    digits
        .split(DIGIT_SEPARATOR)
        .filter(|group| !group.is_empty())
        .map(str::to_string)
        .collect()
}
