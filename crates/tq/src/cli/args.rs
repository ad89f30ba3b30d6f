//! Clap argument definitions for the `tq` CLI.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "tq")]
#[command(about = "Text Query - boolean word search over the lines of a file")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Supported `tq` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Index a file and answer queries read from stdin
    #[command(after_help = "\
Examples:
  tq repl notes.txt               Prompt for expressions such as 'fox & ~jumps'
  tq repl notes.txt --literal     Treat the first word of each line as-is")]
    Repl(ReplCommand),

    /// Index a file and print the report for each expression
    #[command(after_help = "\
Examples:
  tq query notes.txt fox                   Lines containing 'fox'
  tq query notes.txt 'fox & ~(jumps | high)'
  tq query - 'alpha | beta' < notes.txt    Read the text from stdin
  tq query notes.txt fox --json            Machine-readable output")]
    Query(QueryCommand),

    /// List indexed words with the number of lines containing each
    Words(WordsCommand),

    /// Initialize tq configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

/// The text to index.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Text file to index, or '-' for stdin
    pub file: String,
}

/// Arguments for `tq repl`.
#[derive(Args, Debug, Clone)]
pub struct ReplCommand {
    #[command(flatten)]
    /// Source text.
    pub source: SourceArgs,

    /// Look up the first word of each input line verbatim instead of parsing it
    #[arg(long)]
    pub literal: bool,
}

/// Arguments for `tq query`.
#[derive(Args, Debug, Clone)]
pub struct QueryCommand {
    #[command(flatten)]
    /// Source text.
    pub source: SourceArgs,

    /// Query expressions, evaluated in turn
    #[arg(required = true)]
    pub expressions: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show the parsed expression tree without evaluating
    #[arg(long)]
    pub explain: bool,

    /// Maximum matching lines listed per report (0 = unlimited) [default: from config]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `tq words`.
#[derive(Args, Debug, Clone)]
pub struct WordsCommand {
    #[command(flatten)]
    /// Source text.
    pub source: SourceArgs,

    /// Show only the N words found on the most lines
    #[arg(long)]
    pub top: Option<usize>,
}

/// Arguments for `tq init`.
#[derive(Args, Debug, Clone, Copy)]
pub struct InitCommand {
    /// Create global ~/.tq.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}
