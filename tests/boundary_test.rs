use gitflow_version::boundary::BoundaryWarning;
use gitflow_version::ui;

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "vnext".to_string(),
        reason: "Unable to parse the version string: \"next\"".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Cannot parse tag"),
        "Message should contain 'Cannot parse tag', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("vnext"),
        "Message should contain tag 'vnext', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("\"next\""),
        "Message should contain the offending version, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_tag_mismatch_pattern_display() {
    let warning = BoundaryWarning::TagMismatchPattern {
        tag: "build-7".to_string(),
        pattern: "v{version}".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "Tag 'build-7' does not match pattern 'v{version}'"
    );
}

#[test]
fn test_boundary_warning_no_release_tags_display() {
    let warning = BoundaryWarning::NoReleaseTags {
        pattern: "{version}".to_string(),
    };

    assert_eq!(
        warning.to_string(),
        "No release tags matching '{version}' found"
    );
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    ui::display_boundary_warning(&BoundaryWarning::NoReleaseTags {
        pattern: "v{version}".to_string(),
    });
}
