//! Configuration system for tq.
//!
//! tq uses TOML configuration files named `.tq.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.tq.toml` files found,
//! then loading `~/.tq.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod templates;
#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawPromptSettings, RawReportSettings, parse_config_file, parse_config_str,
};
use serde::{Deserialize, Serialize};
pub use templates::template;

/// Top-level merged configuration for tq.
///
/// This represents the fully resolved configuration after merging all discovered `.tq.toml`
/// files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Interactive prompt settings.
    pub prompt: PromptSettings,
    /// Report output settings.
    pub report: ReportSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.tq.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output uses the same layout as a `.tq.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            prompt: &self.prompt,
            report: &self.report,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// How the interactive prompt interprets an input line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuerySyntax {
    /// Parse the line as a boolean expression (`a & ~(b | c)`).
    #[default]
    Expression,
    /// Look up the first whitespace-delimited token verbatim.
    Literal,
}

/// Settings for the interactive prompt.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Prompt text printed before each read.
    pub text: String,
    /// Inputs that end the session.
    pub quit: Vec<String>,
    /// How input lines are interpreted.
    pub syntax: QuerySyntax,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            text: String::from("enter word to look for, or q to quit: "),
            quit: vec![String::from("q")],
            syntax: QuerySyntax::Expression,
        }
    }
}

/// Settings for rendered reports.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Maximum matching lines listed per report (0 = unlimited).
    pub max_lines: usize,
    /// Whether terminal output is colored.
    pub color: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            max_lines: 0,
            color: true,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Interactive prompt settings.
    prompt: &'a PromptSettings,
    /// Report output settings.
    report: &'a ReportSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_defaults() {
        let prompt = PromptSettings::default();
        assert_eq!(prompt.text, "enter word to look for, or q to quit: ");
        assert_eq!(prompt.quit, vec!["q"]);
        assert_eq!(prompt.syntax, QuerySyntax::Expression);
    }

    #[test]
    fn test_report_defaults() {
        let report = ReportSettings::default();
        assert_eq!(report.max_lines, 0);
        assert!(report.color);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_settings_to_toml() {
        let config = Config::default();
        let toml = config.settings_to_toml().unwrap();

        assert!(toml.contains("[prompt]"));
        assert!(toml.contains("[report]"));
        assert!(toml.contains("syntax = \"expression\""));
        assert!(toml.contains("max_lines = 0"));

        let parsed: toml::Value =
            toml::from_str(&toml).expect("settings_to_toml should produce valid TOML");
        assert!(parsed.get("prompt").is_some());
        assert!(parsed.get("report").is_some());
    }

    #[test]
    fn test_settings_to_toml_round_trips_through_raw_config() {
        let mut config = Config::default();
        config.prompt.syntax = QuerySyntax::Literal;
        config.report.max_lines = 7;

        let toml = config.settings_to_toml().unwrap();
        let raw = parse_config_str(&toml, Path::new("effective.toml")).unwrap();

        let prompt = raw.prompt.unwrap();
        assert_eq!(prompt.syntax, Some(QuerySyntax::Literal));
        assert_eq!(prompt.quit, Some(vec!["q".to_string()]));
        assert_eq!(raw.report.unwrap().max_lines, Some(7));
    }
}
