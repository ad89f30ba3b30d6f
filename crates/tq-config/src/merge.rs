//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and validating values.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, PromptSettings, ReportSettings,
    parse::{RawConfig, RawPromptSettings, RawReportSettings},
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Quit words: the first file that sets `quit` replaces the list entirely
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let prompt = merge_prompt_settings(configs)?;
    let report = merge_report_settings(configs);
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent().map(Path::to_path_buf));

    Ok(Config {
        prompt,
        report,
        config_root,
    })
}

/// Merges prompt settings, taking first defined value for each field.
fn merge_prompt_settings(configs: &[ParsedConfig]) -> Result<PromptSettings, ConfigError> {
    let mut result = PromptSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref prompt) = parsed.config.prompt {
            validate_prompt(&parsed.path, prompt)?;
            apply_raw_prompt(&mut result, prompt);
        }
    }

    Ok(result)
}

/// Rejects quit words the prompt could never match.
///
/// The prompt compares the trimmed input line against each quit word, so an
/// empty word or one with whitespace inside can never end a session.
fn validate_prompt(path: &Path, raw: &RawPromptSettings) -> Result<(), ConfigError> {
    let Some(ref quit) = raw.quit else {
        return Ok(());
    };

    let invalid = |message: String| ConfigError::InvalidValue {
        path: path.to_path_buf(),
        key: "prompt.quit",
        message,
    };

    if quit.is_empty() {
        return Err(invalid("at least one quit word is required".into()));
    }
    for word in quit {
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(invalid(format!(
                "quit word {word:?} must be non-empty and contain no whitespace"
            )));
        }
    }

    Ok(())
}

/// Applies raw prompt settings to result, overwriting any present values.
fn apply_raw_prompt(result: &mut PromptSettings, raw: &RawPromptSettings) {
    if let Some(ref v) = raw.text {
        result.text = v.clone();
    }
    if let Some(ref v) = raw.quit {
        result.quit = v.clone();
    }
    if let Some(v) = raw.syntax {
        result.syntax = v;
    }
}

/// Merges report settings.
fn merge_report_settings(configs: &[ParsedConfig]) -> ReportSettings {
    let mut result = ReportSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref report) = parsed.config.report {
            apply_raw_report(&mut result, report);
        }
    }

    result
}

/// Applies raw report settings to result.
fn apply_raw_report(result: &mut ReportSettings, raw: &RawReportSettings) {
    if let Some(v) = raw.max_lines {
        result.max_lines = v;
    }
    if let Some(v) = raw.color {
        result.color = v;
    }
}
