//! tq: Text Query
//!
//! Indexes the lines of a text file by the words they contain and answers
//! boolean word queries such as `fox & ~(jumps | high)`, either interactively
//! or one expression at a time.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(&cli.command, &ctx),
        Err(code) => code,
    }
}
