//! Total ordering over parsed versions
//!
//! Two rules, first match wins:
//!
//! 1. Prefix dominance: when one source string is a strict prefix of the other
//!    and the next character is not `-`, the longer one is greater. This keeps
//!    `1.01 < 1.01.01` and `1.0 < 1.0.0`, which artifact ordering treats as equal.
//! 2. Otherwise both strings are case folded and compared with
//!    [artifact ordering](crate::domain::artifact).

use crate::domain::artifact;
use crate::domain::version::VersionValue;
use crate::error::Result;
use std::cmp::Ordering;

/// Compare two parsed versions
pub fn compare(a: &VersionValue, b: &VersionValue) -> Ordering {
    compare_raw(a.raw(), b.raw())
}

/// Parse and compare two version strings
pub fn compare_str(a: &str, b: &str) -> Result<Ordering> {
    let a = VersionValue::parse(a)?;
    let b = VersionValue::parse(b)?;
    Ok(compare(&a, &b))
}

fn compare_raw(a: &str, b: &str) -> Ordering {
    if extends_numerically(a, b) {
        return Ordering::Greater;
    }
    if extends_numerically(b, a) {
        return Ordering::Less;
    }

    artifact::compare(&fold_case(a), &fold_case(b))
}

/// True when `longer` strictly extends `prefix` with something other than a `-` suffix
fn extends_numerically(longer: &str, prefix: &str) -> bool {
    longer.len() > prefix.len()
        && longer
            .strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with('-'))
}

/// Upper then lower case, so characters without a lower case mapping still fold
fn fold_case(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmp(a: &str, b: &str) -> Ordering {
        compare_str(a, b).unwrap()
    }

    #[test]
    fn test_tagged_version_ordering() {
        assert_eq!(cmp("1.0", "1.1"), Ordering::Less);
        assert_eq!(cmp("1.1", "1.0"), Ordering::Greater);
        assert_eq!(cmp("1.0", "1.0"), Ordering::Equal);
        assert_eq!(cmp("1.0.1", "1.0.0"), Ordering::Greater);
        assert_eq!(cmp("1.0.1", "1.0"), Ordering::Greater);
        assert_eq!(cmp("1.0.0", "1.0"), Ordering::Greater);
        assert_eq!(cmp("2.0.14", "1.5.0"), Ordering::Greater);
        assert_eq!(cmp("2.3.4", "1.9.5"), Ordering::Greater);
        assert_eq!(cmp("2.1.3", "2.0.7"), Ordering::Greater);
        assert_eq!(cmp("2.4.8", "2.4.7"), Ordering::Greater);
        assert_eq!(cmp("2", "1.3.0"), Ordering::Greater);
        assert_eq!(cmp("2.0.0", "1.3"), Ordering::Greater);
        assert_eq!(cmp("0.12", "0.9"), Ordering::Greater);
        assert_eq!(cmp("15.0", "3.0"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_dominance() {
        assert_eq!(cmp("1.01", "1.01.01"), Ordering::Less);
        assert_eq!(cmp("1.01.01", "1.01"), Ordering::Greater);
        assert_eq!(cmp("1.0", "1.0.0"), Ordering::Less);
    }

    #[test]
    fn test_hyphen_suffix_skips_prefix_rule() {
        assert_eq!(cmp("1.01-beta", "1.01"), Ordering::Less);
        assert_eq!(cmp("1.0-SNAPSHOT", "1.0"), Ordering::Less);
        assert_eq!(cmp("1.0", "1.0-rc-1"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_rule_applies_to_underscore_suffix() {
        // Only '-' is exempt, so "1.0_beta" extends "1.0"
        assert_eq!(cmp("1.0_beta", "1.0"), Ordering::Greater);
    }

    #[test]
    fn test_qualifiers_compare_case_insensitively() {
        assert_eq!(cmp("1.0-RC-1", "1.0-rc-1"), Ordering::Equal);
        assert_eq!(cmp("1.0-Beta", "1.0-ALPHA"), Ordering::Greater);
    }

    #[test]
    fn test_qualifier_ranking() {
        assert_eq!(cmp("1.0-alpha-1", "1.0-beta-1"), Ordering::Less);
        assert_eq!(cmp("1.0-beta-2", "1.0-rc-1"), Ordering::Less);
        assert_eq!(cmp("1.0-rc-1", "1.0-SNAPSHOT"), Ordering::Less);
        assert_eq!(cmp("2.0-SNAPSHOT", "1.9"), Ordering::Greater);
    }

    #[test]
    fn test_build_only_values() {
        assert_eq!(cmp("SNAPSHOT", "SNAPSHOT"), Ordering::Equal);
        assert_eq!(cmp("trunk-SNAPSHOT", "1.0"), Ordering::Less);
    }

    #[test]
    fn test_reflexive() {
        for v in ["1", "1.0.1-rc-2-b5", "trunk-SNAPSHOT", "01.1", "2.0rc1"] {
            assert_eq!(cmp(v, v), Ordering::Equal, "{}", v);
        }
    }

    #[test]
    fn test_compare_str_rejects_invalid_input() {
        assert!(compare_str("1.0", "not a version!!").is_err());
    }

    #[test]
    fn test_fold_case() {
        assert_eq!(fold_case("1.0-RC"), "1.0-rc");
    }
}
