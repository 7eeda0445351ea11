use crate::domain::CoreRendering;
use crate::error::{Result, SemverCompareError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "semver-compare.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE: &str = ".semver-compare.toml";

/// Represents the complete configuration for semver-compare.
///
/// Contains how versions are rendered and how results are printed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub rendering: RenderingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration for rendering version strings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RenderingConfig {
    /// Whether omitted minor/patch components are kept omitted or shown as 0
    #[serde(default)]
    pub core: CoreRendering,
}

/// Output format of the command line tool.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_color() -> bool {
    true
}

/// Configuration for printed output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `semver-compare.toml` in current directory
/// 3. `.semver-compare.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(SemverCompareError::config(format!(
                    "configuration file '{}' does not exist",
                    path.display()
                )));
            }
            path
        }
        None => match find_config_file() {
            Some(path) => path,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path)?;
    parse_config(&config_str)
}

/// Parse configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

impl Config {
    /// Apply command line overrides on top of the loaded file.
    pub fn with_overrides(mut self, zero_fill: bool, json: bool, no_color: bool) -> Self {
        if zero_fill {
            self.rendering.core = CoreRendering::ZeroFill;
        }
        if json {
            self.output.format = OutputFormat::Json;
        }
        if no_color {
            self.output.color = false;
        }
        self
    }
}
