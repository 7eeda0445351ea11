use thiserror::Error;

/// Reasons a string failed to parse as a semantic version.
///
/// Every variant is the same "invalid" outcome; the variant names the stage
/// that rejected the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty version string")]
    EmptyInput,

    #[error("malformed version core '{core}': {reason}")]
    MalformedCore { core: String, reason: String },

    #[error("malformed pre-release identifier '{identifier}': {reason}")]
    MalformedPrerelease { identifier: String, reason: String },

    #[error("malformed build identifier '{identifier}': {reason}")]
    MalformedBuild { identifier: String, reason: String },
}

impl ParseError {
    /// Create a core error with context
    pub fn core(core: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::MalformedCore {
            core: core.into(),
            reason: reason.into(),
        }
    }

    /// Create a pre-release error with context
    pub fn prerelease(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::MalformedPrerelease {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Create a build error with context
    pub fn build(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::MalformedBuild {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Short name of the parsing stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            ParseError::EmptyInput => "input",
            ParseError::MalformedCore { .. } => "core",
            ParseError::MalformedPrerelease { .. } => "pre-release",
            ParseError::MalformedBuild { .. } => "build",
        }
    }
}

/// Unified error type for semver-compare operations
#[derive(Error, Debug)]
pub enum SemverCompareError {
    #[error("Version parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in semver-compare
pub type Result<T> = std::result::Result<T, SemverCompareError>;

impl SemverCompareError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverCompareError::Config(msg.into())
    }
}
