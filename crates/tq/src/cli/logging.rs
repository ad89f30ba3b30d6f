//! Diagnostic logging for the `tq` binary.
//!
//! Library crates emit `tracing` events; this installs the subscriber that
//! writes them to stderr.

use std::io;

use tracing_subscriber::{EnvFilter, fmt};

/// Crates whose events follow the `-v` level; everything else stays at warn.
const CRATES: &[&str] = &["tq", "tq_config", "tq_index", "tq_query"];

/// Maps the `-v` count to a level name.
fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the default filter directive for a verbosity count.
fn default_directive(verbose: u8) -> String {
    let level = level_for(verbose);
    let mut directive: Vec<String> = CRATES.iter().map(|c| format!("{c}={level}")).collect();
    directive.push("warn".to_string());
    directive.join(",")
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    if let Err(e) = installed {
        eprintln!("warning: could not initialize logging: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directive_scopes_workspace_crates() {
        assert_eq!(
            default_directive(2),
            "tq=debug,tq_config=debug,tq_index=debug,tq_query=debug,warn"
        );
    }
}
