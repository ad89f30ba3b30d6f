//! Implementation of `tq repl`.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use tq_config::{PromptSettings, QuerySyntax};
use tq_index::{Evaluate, Query, TextIndex, parse};
use tracing::debug;

use crate::cli::{
    args::ReplCommand,
    context::{CommandContext, STDIN_SOURCE},
    output::{ReportStyle, format_report},
};

/// Indexes the source file and answers queries read from stdin.
pub fn run(ctx: &CommandContext, cmd: &ReplCommand) -> ExitCode {
    if cmd.source.file == STDIN_SOURCE {
        eprintln!("error: repl reads queries from stdin, so the text must come from a file");
        return ExitCode::FAILURE;
    }

    let index = match ctx.open_index(&cmd.source) {
        Ok(index) => index,
        Err(code) => return code,
    };

    let mut prompt = ctx.config.prompt.clone();
    if cmd.literal {
        prompt.syntax = QuerySyntax::Literal;
    }
    let style = ReportStyle {
        color: ctx.use_color(),
        max_lines: ctx.config.report.max_lines,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&index, &prompt, style, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// What one input line asks the session to do.
#[derive(Debug)]
enum Input {
    /// Nothing to evaluate.
    Skip,
    /// End the session.
    Quit,
    /// Look up one word as typed.
    Word(String),
    /// Evaluate and report.
    Query(Query),
}

/// Interprets one input line under the prompt settings.
///
/// Syntax errors are reported on stderr and the line is skipped.
fn interpret(line: &str, prompt: &PromptSettings) -> Input {
    let trimmed = line.trim();
    let is_quit = |text: &str| prompt.quit.iter().any(|word| word == text);

    match prompt.syntax {
        // One whitespace token per line; the rest is ignored.
        QuerySyntax::Literal => match trimmed.split_whitespace().next() {
            None => Input::Skip,
            Some(word) if is_quit(word) => Input::Quit,
            Some(word) => Input::Word(word.to_string()),
        },
        QuerySyntax::Expression if trimmed.is_empty() => Input::Skip,
        QuerySyntax::Expression if is_quit(trimmed) => Input::Quit,
        QuerySyntax::Expression => match parse(trimmed) {
            Ok(Some(query)) => Input::Query(query),
            Ok(None) => Input::Skip,
            Err(e) => {
                eprintln!("error: {}", e.to_string().trim_end());
                Input::Skip
            }
        },
    }
}

/// Runs the prompt loop until a quit word or end of input.
///
/// Each report is followed by a blank line.
pub fn run_session<R, W>(
    index: &TextIndex,
    prompt: &PromptSettings,
    style: ReportStyle,
    mut input: R,
    mut out: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{}", prompt.text)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            debug!("end of input");
            return Ok(());
        }

        match interpret(&line, prompt) {
            Input::Skip => {}
            Input::Quit => return Ok(()),
            Input::Word(word) => {
                let result = index.lookup(&word);
                debug!(word = %word, matches = result.len(), "answered lookup");
                write!(out, "{}", format_report(&Query::word(word), &result, style))?;
                writeln!(out)?;
            }
            Input::Query(query) => {
                let result = query.eval(index);
                debug!(query = %result.sought(), matches = result.len(), "answered query");
                write!(out, "{}", format_report(&query, &result, style))?;
                writeln!(out)?;
            }
        }
    }
}
