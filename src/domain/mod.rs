//! Domain logic - version values, the parser and the comparison rules

pub mod build;
pub mod comparable;
mod interop;
pub mod parser;
pub mod prerelease;
pub mod severity;
pub mod version;

pub use build::BuildIdentifier;
pub use comparable::{CoreRendering, SemanticVersion};
pub use parser::parse;
pub use prerelease::PrereleaseIdentifier;
pub use severity::UpdateSeverity;
pub use version::Version;
