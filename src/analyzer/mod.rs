//! Analysis engine for reporting on versions

pub mod comparison;
pub mod description;

pub use comparison::{analyze, Comparison, Relation};
pub use description::{describe, Description, IdentifierDescription, IdentifierKind};
