use std::fmt;

/// Warnings raised while scanning repository tags for release versions.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but its version part cannot be parsed
    UnparsableTag { tag: String, reason: String },
    /// Tag exists but doesn't match the configured pattern
    TagMismatchPattern { tag: String, pattern: String },
    /// No tag in the repository carries a release version
    NoReleaseTags { pattern: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::TagMismatchPattern { tag, pattern } => {
                write!(f, "Tag '{}' does not match pattern '{}'", tag, pattern)
            }
            BoundaryWarning::NoReleaseTags { pattern } => {
                write!(f, "No release tags matching '{}' found", pattern)
            }
        }
    }
}
