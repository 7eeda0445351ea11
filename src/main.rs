use anyhow::Result;
use clap::Parser;

use semver_compare::analyzer;
use semver_compare::config::{self, Config, OutputFormat};
use semver_compare::logging;
use semver_compare::ui;
use semver_compare::Version;

#[derive(clap::Parser)]
#[command(
    name = "semver-compare",
    version,
    about = "Parse semantic versions and classify the update between two of them"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version to inspect, or the current version when comparing"
    )]
    current: String,

    #[arg(value_name = "CANDIDATE", help = "Candidate version to compare against")]
    candidate: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Render omitted minor/patch components as 0")]
    zero_fill: bool,

    #[arg(long, help = "Print machine readable JSON")]
    json: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg.with_overrides(args.zero_fill, args.json, args.no_color),
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    ui::set_colors(config.output.color);
    tracing::debug!(?config, "effective configuration");

    let current = parse_or_exit(&args.current);
    match args.candidate {
        Some(candidate) => {
            let candidate = parse_or_exit(&candidate);
            report_comparison(&config, &current, &candidate)
        }
        None => report_version(&config, &current),
    }
}

fn parse_or_exit(input: &str) -> Version {
    match Version::parse(input) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!("invalid version '{}': {}", input, e));
            std::process::exit(1);
        }
    }
}

fn report_version(config: &Config, version: &Version) -> Result<()> {
    let description = analyzer::describe(version, config.rendering.core);
    match config.output.format {
        OutputFormat::Json => ui::print_description_json(&description),
        OutputFormat::Text => {
            ui::display_description(&description);
            ui::display_success(&format!("'{}' is a valid semantic version", version));
            Ok(())
        }
    }
}

fn report_comparison(config: &Config, current: &Version, candidate: &Version) -> Result<()> {
    let report = analyzer::analyze(current, candidate);
    match config.output.format {
        OutputFormat::Json => ui::print_comparison_json(&report, config.rendering.core),
        OutputFormat::Text => {
            ui::display_comparison(&report, config.rendering.core);
            Ok(())
        }
    }
}
