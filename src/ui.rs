//! Terminal output for the command line tool.

use crate::boundary::BoundaryWarning;
use crate::domain::VersionValue;
use console::style;
use std::cmp::Ordering;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Field listing of a parsed version, one `name: value` line each.
pub fn describe_version(version: &VersionValue) -> Vec<String> {
    fn show<T: ToString>(field: Option<T>) -> String {
        field.map_or_else(|| "-".to_string(), |v| v.to_string())
    }

    let kind = if version.is_build_only() {
        "build-only"
    } else {
        "standard"
    };

    vec![
        format!("version: {}", version.raw()),
        format!("form: {}", kind),
        format!("digits: {}", show(version.digits().map(|d| d.join(".")))),
        format!("annotation separator: {}", show(version.annotation_separator())),
        format!("annotation: {}", show(version.annotation())),
        format!(
            "annotation revision separator: {}",
            show(version.annotation_rev_separator())
        ),
        format!("annotation revision: {}", show(version.annotation_revision())),
        format!("build separator: {}", show(version.build_separator())),
        format!("build specifier: {}", show(version.build_specifier())),
    ]
}

/// Print the fields of a parsed version.
pub fn display_version(version: &VersionValue) {
    for line in describe_version(version) {
        println!("  {}", line);
    }
}

/// Symbol for a comparison result.
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_standard_version() {
        let v = VersionValue::parse("1.0-beta-2").unwrap();
        let lines = describe_version(&v);
        assert!(lines.contains(&"digits: 1.0".to_string()));
        assert!(lines.contains(&"annotation: beta".to_string()));
        assert!(lines.contains(&"annotation revision: 2".to_string()));
        assert!(lines.contains(&"build specifier: -".to_string()));
    }

    #[test]
    fn test_describe_build_only_version() {
        let v = VersionValue::parse("trunk-SNAPSHOT").unwrap();
        let lines = describe_version(&v);
        assert!(lines.contains(&"form: build-only".to_string()));
        assert!(lines.contains(&"digits: -".to_string()));
        assert!(lines.contains(&"build specifier: trunk-SNAPSHOT".to_string()));
    }

    #[test]
    fn test_ordering_symbol() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "=");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
    }

    #[test]
    fn test_display_helpers() {
        // Visual verification test - output is printed to stdout/stderr
        display_error("test error");
        display_success("test success");
        display_status("test status");
    }
}
