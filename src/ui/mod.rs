//! User interface module - terminal text and JSON output.
//!
//! Separates concerns:
//! - `formatter` - Styled text for people
//! - This module - Machine readable output and color control

use anyhow::Result;
use serde_json::{json, Value};

use crate::analyzer::{Comparison, Description};
use crate::domain::{CoreRendering, SemanticVersion};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_advisory, display_comparison, display_description, display_error, display_success,
};

/// Enable or disable styling on both output streams.
pub fn set_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// JSON document for a comparison report.
///
/// Version strings follow `rendering`; advisories keep their natural form.
pub fn comparison_json(report: &Comparison, rendering: CoreRendering) -> Result<Value> {
    let mut value = serde_json::to_value(report)?;
    value["current"] = json!(report.current.absolute_string_with(rendering));
    value["candidate"] = json!(report.candidate.absolute_string_with(rendering));
    value["messages"] = json!(report
        .advisories
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>());
    Ok(value)
}

/// Print a single version breakdown as pretty JSON.
pub fn print_description_json(description: &Description) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(description)?);
    Ok(())
}

/// Print a comparison report as pretty JSON.
pub fn print_comparison_json(report: &Comparison, rendering: CoreRendering) -> Result<()> {
    let value = comparison_json(report, rendering)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
