//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build the text and the `display_*` functions
//! print it. Styling goes through `console`, so disabling colors globally
//! turns every function here into plain text.

use crate::advisory::Advisory;
use crate::analyzer::{Comparison, Description, IdentifierDescription};
use crate::domain::{CoreRendering, SemanticVersion, UpdateSeverity};
use console::{style, StyledObject};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Display an advisory to the user.
///
/// Shows a yellow warning icon followed by the advisory message.
pub fn display_advisory(advisory: &Advisory) {
    eprintln!("{}", format_advisory(advisory));
}

pub fn format_advisory(advisory: &Advisory) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), advisory)
}

/// Display the breakdown of a single version.
pub fn display_description(description: &Description) {
    println!("{}", format_description(description));
}

/// Build the breakdown of a single version.
///
/// Lists the core, every pre-release identifier with its kind, every build
/// identifier with its kind and the absolute string.
pub fn format_description(description: &Description) -> String {
    let mut lines = vec![
        format!("{}", style(format!("Version {}", description.version)).bold()),
        format!("  Core:        {}", style(&description.core).cyan()),
    ];

    lines.push(format!(
        "  Pre-release: {}",
        format_identifiers(&description.prerelease)
    ));
    lines.push(format!(
        "  Build:       {}",
        format_identifiers(&description.build)
    ));
    lines.push(format!("  Absolute:    {}", description.version));

    lines.join("\n")
}

fn format_identifiers(identifiers: &[IdentifierDescription]) -> String {
    if identifiers.is_empty() {
        return format!("{}", style("(none)").dim());
    }
    identifiers
        .iter()
        .map(|identifier| {
            format!(
                "{} {}",
                identifier.value,
                style(format!("({})", identifier.kind.as_str())).dim()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display a comparison report, followed by its advisories on stderr.
pub fn display_comparison(report: &Comparison, rendering: CoreRendering) {
    println!("{}", format_comparison(report, rendering));
    for advisory in &report.advisories {
        display_advisory(advisory);
    }
}

/// Build the comparison report shown for two versions.
pub fn format_comparison(report: &Comparison, rendering: CoreRendering) -> String {
    let compatibility = if report.compatible {
        style(report.compatibility_sentence()).green()
    } else {
        style(report.compatibility_sentence()).red()
    };

    [
        format!(
            "{}",
            style(format!(
                "A: {}  B: {}",
                report.current.absolute_string_with(rendering),
                report.candidate.absolute_string_with(rendering)
            ))
            .bold()
        ),
        format!(
            "  Relation:      {} ({})",
            report.relation,
            report.relation.symbol()
        ),
        format!(
            "  Severity:      {} {}",
            style_severity(report.severity),
            report.severity_sentence()
        ),
        format!("  Compatibility: {}", compatibility),
    ]
    .join("\n")
}

fn style_severity(severity: UpdateSeverity) -> StyledObject<String> {
    let label = style(format!("[{}]", severity));
    match severity {
        UpdateSeverity::Major => label.red().bold(),
        UpdateSeverity::Minor => label.yellow(),
        UpdateSeverity::Patch => label.green(),
        UpdateSeverity::Prerelease | UpdateSeverity::Build => label.cyan(),
        UpdateSeverity::NoUpdate => label.dim(),
    }
}
