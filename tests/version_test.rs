// tests/version_test.rs
use gitflow_version::domain::{compare, formatter, parse};
use gitflow_version::{HotfixVersion, ReleaseVersion, TaggedVersion, VersionError};
use std::cmp::Ordering;

fn cmp(a: &str, b: &str) -> Ordering {
    compare(&parse(a).unwrap(), &parse(b).unwrap())
}

#[test]
fn test_digit_only_ordering() {
    assert_eq!(cmp("1.0", "1.1"), Ordering::Less);
    assert_eq!(cmp("2", "1.3.0"), Ordering::Greater);
    assert_eq!(cmp("15.0", "3.0"), Ordering::Greater);
}

#[test]
fn test_prefix_dominance() {
    assert_eq!(cmp("1.0.1", "1.0"), Ordering::Greater);
    assert_eq!(cmp("1.0.0", "1.0"), Ordering::Greater);
}

#[test]
fn test_equality_is_reflexive() {
    for s in [
        "1",
        "1.0",
        "1.0-SNAPSHOT",
        "SNAPSHOT",
        "trunk-SNAPSHOT",
        "1.0.1-rc-2-b5",
        "3.4_alpha_7_nightly",
    ] {
        assert_eq!(cmp(s, s), Ordering::Equal, "{}", s);
        assert_eq!(parse(s).unwrap(), parse(s).unwrap());
    }
}

#[test]
fn test_sorting_release_versions() {
    let mut versions: Vec<ReleaseVersion> = ["2.0", "1.0-beta-1", "1.0.1", "1.0", "1.0-rc-1", "0.9"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    versions.sort();

    let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
    assert_eq!(
        sorted,
        vec!["0.9", "1.0-beta-1", "1.0-rc-1", "1.0", "1.0.1", "2.0"]
    );
}

#[test]
fn test_round_trip() {
    for s in ["1.0", "1.0.1-rc-2-b5", "1.0-SNAPSHOT", "2.0rc1", "1.0-2", "007.1"] {
        assert_eq!(formatter::format(&parse(s).unwrap()), s);
    }
}

#[test]
fn test_round_trip_structure_is_stable() {
    for s in [
        "1.0-beta-SNAPSHOT",
        "1.0-beta--x",
        "1.0-SNAPSHOT-2",
        "1.0-",
        "1_",
        "1.0-rc1-",
        "1.0-beta-2-",
        "1.0--2",
        "1.0-2",
        "1.0-.x",
    ] {
        let parsed = parse(s).unwrap();
        let reparsed = parse(&formatter::format(&parsed)).unwrap();
        assert_eq!(reparsed.form(), parsed.form(), "{}", s);
    }
}

#[test]
fn test_increment_padding() {
    let rc = HotfixVersion::parse("1.0-rc-09").unwrap();
    assert_eq!(rc.next_version().unwrap().value().annotation_revision(), Some("10"));

    let plain = HotfixVersion::parse("1.9").unwrap();
    assert_eq!(plain.next_version().unwrap().value().digits().unwrap()[1], "10");
}

#[test]
fn test_hotfix_table() {
    let hotfix = |s: &str| HotfixVersion::parse(s).unwrap().hotfix_version_string().unwrap();
    assert_eq!(hotfix("1.1"), "1.1.1");
    assert_eq!(hotfix("1"), "1.0.1");
    assert_eq!(hotfix("1.1.1"), "1.1.2");
}

#[test]
fn test_decrement() {
    let decrement = |s: &str| {
        HotfixVersion::parse(s)
            .unwrap()
            .decremented_hotfix_version_string()
            .unwrap()
    };
    assert_eq!(decrement("1.1"), "1.0.1");
    assert_eq!(decrement("1.0"), "1.1");
}

#[test]
fn test_snapshot_handling() {
    for s in ["SNAPSHOT", "trunk-SNAPSHOT"] {
        let v = HotfixVersion::parse(s).unwrap();
        assert!(v.value().is_build_only());
        assert!(v.is_snapshot());
    }
    assert_eq!(
        HotfixVersion::parse("SNAPSHOT")
            .unwrap()
            .release_version_string(),
        "1.0"
    );
}

#[test]
fn test_derivation_on_build_only_fails() {
    let v = HotfixVersion::parse("SNAPSHOT").unwrap();
    assert!(matches!(
        v.next_version(),
        Err(VersionError::IncompatibleComparison(_))
    ));
}

#[test]
fn test_parse_error() {
    let err = parse("not a version!!").unwrap_err();
    assert!(matches!(err, VersionError::Parse { ref input } if input == "not a version!!"));
}

#[test]
fn test_tagged_version_picks_maximum() {
    let tags = ["1.0", "1.1", "1.0.1", "0.12", "1.1-SNAPSHOT"];
    let latest = tags
        .iter()
        .map(|t| TaggedVersion::new(t, *t).unwrap())
        .max()
        .unwrap();
    assert_eq!(*latest.tag(), "1.1");
}

#[test]
fn test_tagged_version_rejects_invalid() {
    assert!(TaggedVersion::new("v1.0", ()).is_err());
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let v = HotfixVersion::parse(&format!("1.{}", i)).unwrap();
                v.next_version().unwrap().to_string()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("1.{}", i + 1));
    }
}

#[test]
fn test_prefix_rule_breaks_transitivity() {
    let order = |a: &str, b: &str| compare(&parse(a).unwrap(), &parse(b).unwrap());
    assert_eq!(order("1-beta", "1"), Ordering::Less);
    assert_eq!(order("1", "1.0-alpha"), Ordering::Less);
    assert_eq!(order("1.0-alpha", "1-beta"), Ordering::Less);
}
