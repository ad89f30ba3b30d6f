//! Implementation of `tq config`.

use std::process::ExitCode;

use tq_highlight::Highlighter;

use crate::cli::{context::CommandContext, output::dim};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let toml = match config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &config.config_root {
        Some(root) => println!("{}", dim(&format!("# closest config: {}", root.display()))),
        None => println!("{}", dim("# no config files found; showing defaults")),
    }
    print!("{}", Highlighter::new().highlight_toml(&toml));
    ExitCode::SUCCESS
}
