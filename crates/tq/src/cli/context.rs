//! Shared context for running CLI commands.

use std::{
    env,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use tq_config::Config;
use tq_index::TextIndex;
use tracing::debug;

use super::args::SourceArgs;

/// Source name that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Builds the index for the requested source, reporting failures on stderr.
    pub fn open_index(&self, source: &SourceArgs) -> Result<TextIndex, ExitCode> {
        let built = if source.file == STDIN_SOURCE {
            TextIndex::from_reader(io::stdin().lock())
        } else {
            TextIndex::from_path(&self.cwd.join(&source.file))
        };

        match built {
            Ok(index) => {
                debug!(
                    source = %source.file,
                    lines = index.line_count(),
                    "opened source"
                );
                Ok(index)
            }
            Err(e) => {
                eprintln!("error: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }

    /// Whether reports should carry terminal colors.
    ///
    /// Requires both the `report.color` setting and a terminal on stdout.
    pub fn use_color(&self) -> bool {
        self.config.report.color && io::stdout().is_terminal()
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
