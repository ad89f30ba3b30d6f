//! Locating `.tq.toml` files.
//!
//! Every ancestor of the working directory may hold a config file. The global
//! `~/.tq.toml` sits below all of them in precedence.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".tq.toml";

/// Lists the config files that apply to `cwd`, closest first.
///
/// The walk stops at the first file declaring `root = true`; in that case the
/// global config is left out as well.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stop = is_root_config(&candidate);
        configs.push(candidate);
        if stop {
            return configs;
        }
    }

    // cwd may itself live under $HOME, in which case the walk already saw it.
    let global = global_config_path().filter(|path| path.is_file() && !configs.contains(path));
    configs.extend(global);
    configs
}

/// `~/.tq.toml`, or `None` without a home directory.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Whether `path` is the global config file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
