use thiserror::Error;

/// Unified error type for gitflow-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Unable to parse the version string: \"{input}\"")]
    Parse { input: String },

    #[error("Incompatible version: {0}")]
    IncompatibleComparison(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gitflow-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a parse error carrying the offending input
    pub fn parse(input: impl Into<String>) -> Self {
        VersionError::Parse {
            input: input.into(),
        }
    }

    /// Create an error for a derivation on a value without digit groups
    pub fn incompatible(msg: impl Into<String>) -> Self {
        VersionError::IncompatibleComparison(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        VersionError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }
}
