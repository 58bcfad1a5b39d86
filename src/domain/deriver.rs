//! Derivation of new versions from existing ones
//!
//! Every operation reads a [`VersionValue`] and builds a new one; the input is
//! never modified. Annotation, revision and build fields carry over into the
//! derived value untouched.

use crate::domain::grammar::SNAPSHOT_IDENTIFIER;
use crate::domain::version::{Components, VersionValue};
use crate::error::{Result, VersionError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Release version assumed for a bare `SNAPSHOT`
pub const DEFAULT_RELEASE_VERSION: &str = "1.0";

/// Token appended by the hotfix rule to versions with more than three digit groups
pub const HOTFIX_MARKER: &str = "hotfix";

/// Timestamped snapshot such as `1.0-20090101.123456-3`
static TIMESTAMPED_SNAPSHOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)-([0-9]{8}\.[0-9]{6})-([0-9]+)$").expect("Invalid timestamped snapshot regex")
});

fn components_of<'a>(version: &'a VersionValue, operation: &str) -> Result<&'a Components> {
    version.components().ok_or_else(|| {
        VersionError::incompatible(format!(
            "cannot compute {} of '{}': it has no digit groups",
            operation,
            version.raw()
        ))
    })
}

/// Next version: increments a numeric annotation revision, otherwise the last digit group
///
/// Zero padding is kept (`"09"` becomes `"10"`, `"007"` becomes `"008"`).
pub fn next_version(version: &VersionValue) -> Result<VersionValue> {
    let mut components = components_of(version, "the next version")?.clone();

    match components.annotation_revision.as_deref() {
        Some(revision) if is_numeric(revision) => {
            components.annotation_revision = Some(increment_padded(revision));
        }
        _ => {
            let last = components.digits.last_mut().ok_or_else(|| {
                VersionError::incompatible(format!(
                    "cannot compute the next version of '{}': it has no digit groups",
                    version.raw()
                ))
            })?;
            if !is_numeric(last) {
                return Err(VersionError::incompatible(format!(
                    "cannot increment non-numeric group '{}' of '{}'",
                    last,
                    version.raw()
                )));
            }
            *last = increment_padded(last);
        }
    }

    let next = VersionValue::from_components(components);
    debug!(from = version.raw(), to = next.raw(), "computed next version");
    Ok(next)
}

/// Version of a new hotfix branch, as a release string
///
/// | digit groups | result                          |
/// |--------------|---------------------------------|
/// | 0            | `0.0.1`                         |
/// | 1            | append `.0.1`                   |
/// | 2            | append `.1`                     |
/// | 3            | patch + 1                       |
/// | more         | append [`HOTFIX_MARKER`]        |
pub fn hotfix_version(version: &VersionValue) -> Result<String> {
    let mut components = components_of(version, "a hotfix version")?.clone();
    let digits = &mut components.digits;

    match digits.len() {
        0 => digits.extend(["0", "0", "1"].map(String::from)),
        1 => digits.extend(["0", "1"].map(String::from)),
        2 => digits.push("1".to_string()),
        3 => {
            let patch = increment_decimal(&digits[2]);
            digits[2] = patch;
        }
        _ => digits.push(HOTFIX_MARKER.to_string()),
    }

    let hotfix = release_version_string(&VersionValue::from_components(components));
    debug!(from = version.raw(), to = %hotfix, "computed hotfix version");
    Ok(hotfix)
}

/// Version that would have preceded this one on the hotfix line, as a release string
///
/// A non-zero last group is decremented and a `1` group appended (`1.1` gives
/// `1.0.1`); a zero last group becomes `1` (`1.0` gives `1.1`).
pub fn decremented_hotfix_version(version: &VersionValue) -> Result<String> {
    let mut components = components_of(version, "a decremented hotfix version")?.clone();
    let digits = &mut components.digits;

    let Some(last) = digits.last_mut() else {
        return Err(VersionError::incompatible(format!(
            "cannot decrement '{}': it has no digit groups",
            version.raw()
        )));
    };
    if !is_numeric(last) {
        return Err(VersionError::incompatible(format!(
            "cannot decrement non-numeric group '{}' of '{}'",
            last,
            version.raw()
        )));
    }

    match decrement_decimal(last) {
        Some(previous) => {
            *last = previous;
            digits.push("1".to_string());
        }
        None => *last = "1".to_string(),
    }

    let decremented = release_version_string(&VersionValue::from_components(components));
    debug!(from = version.raw(), to = %decremented, "computed decremented hotfix version");
    Ok(decremented)
}

/// True when the version ends with `SNAPSHOT` (any case) or is a timestamped snapshot
pub fn is_snapshot(version: &VersionValue) -> bool {
    ends_with_ignore_case(version.raw(), SNAPSHOT_IDENTIFIER)
        || TIMESTAMPED_SNAPSHOT.is_match(version.raw())
}

/// Version with any snapshot suffix removed
///
/// A bare `SNAPSHOT` becomes [`DEFAULT_RELEASE_VERSION`].
pub fn release_version_string(version: &VersionValue) -> String {
    let raw = version.raw();
    let suffix = format!("-{}", SNAPSHOT_IDENTIFIER);

    if let Some(caps) = TIMESTAMPED_SNAPSHOT.captures(raw) {
        caps.get(1).map_or("", |m| m.as_str()).to_string()
    } else if ends_with_ignore_case(raw, &suffix) {
        raw[..raw.len() - suffix.len()].to_string()
    } else if raw == SNAPSHOT_IDENTIFIER {
        DEFAULT_RELEASE_VERSION.to_string()
    } else {
        raw.to_string()
    }
}

/// Release version with `-SNAPSHOT` appended
pub fn snapshot_version_string(version: &VersionValue) -> String {
    if version.raw() == SNAPSHOT_IDENTIFIER {
        return SNAPSHOT_IDENTIFIER.to_string();
    }

    let base = release_version_string(version);
    if base.is_empty() {
        SNAPSHOT_IDENTIFIER.to_string()
    } else {
        format!("{}-{}", base, SNAPSHOT_IDENTIFIER)
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn ends_with_ignore_case(s: &str, suffix: &str) -> bool {
    s.len() >= suffix.len()
        && s.is_char_boundary(s.len() - suffix.len())
        && s[s.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Add one to a decimal string, keeping its width when it was zero padded
fn increment_padded(digits: &str) -> String {
    let incremented = increment_decimal(digits);
    if incremented.len() < digits.len() {
        format!("{:0>width$}", incremented, width = digits.len())
    } else {
        incremented
    }
}

/// Add one to a decimal string; the result has no leading zeros
fn increment_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();

    let mut carry = true;
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    String::from_utf8(out).unwrap_or_default()
}

/// Subtract one from a decimal string; `None` when it is zero
fn decrement_decimal(digits: &str) -> Option<String> {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return None;
    }

    let mut out: Vec<u8> = trimmed.bytes().collect();
    for byte in out.iter_mut().rev() {
        if *byte == b'0' {
            *byte = b'9';
        } else {
            *byte -= 1;
            break;
        }
    }

    let result = String::from_utf8(out).unwrap_or_default();
    let result = result.trim_start_matches('0');
    Some(if result.is_empty() {
        "0".to_string()
    } else {
        result.to_string()
    })
}
