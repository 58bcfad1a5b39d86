//! Rendering of parsed versions back to strings

use crate::domain::grammar::DIGIT_SEPARATOR;
use crate::domain::version::{Components, VersionForm, VersionValue};

/// Canonical string of a version
///
/// Build-only values render as their source string.
pub fn format(version: &VersionValue) -> String {
    match version.form() {
        VersionForm::Standard(components) => format_components(components),
        VersionForm::BuildOnly => version.raw().to_string(),
    }
}

/// Join digit groups with `.` and append each present field after its separator
pub fn format_components(components: &Components) -> String {
    let mut out = join_digits(&components.digits);

    if let Some(annotation) = non_empty(&components.annotation) {
        push_separator(&mut out, components.annotation_separator);
        out.push_str(annotation);
    }

    if let Some(revision) = non_empty(&components.annotation_revision) {
        // Without an annotation both separators precede the revision
        if non_empty(&components.annotation).is_none() {
            push_separator(&mut out, components.annotation_separator);
        }
        push_separator(&mut out, components.annotation_rev_separator);
        out.push_str(revision);
    }

    if let Some(build) = non_empty(&components.build_specifier) {
        push_separator(&mut out, components.build_separator);
        out.push_str(build);
    }

    out
}

/// Digit groups joined with `.`
pub fn join_digits(digits: &[String]) -> String {
    digits.join(&DIGIT_SEPARATOR.to_string())
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn push_separator(out: &mut String, separator: Option<char>) {
    if let Some(sep) = separator {
        out.push(sep);
    }
}
