pub mod advisory;
pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;

pub use domain::{
    parse, BuildIdentifier, CoreRendering, PrereleaseIdentifier, SemanticVersion, UpdateSeverity,
    Version,
};
pub use error::{ParseError, Result, SemverCompareError};
