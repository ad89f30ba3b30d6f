//! Implementation of `tq words`.

use std::{cmp::Reverse, process::ExitCode};

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use tq_index::TextIndex;

use crate::cli::{args::WordsCommand, context::CommandContext, output::dim};

/// Prints a table of indexed words and the number of lines containing each.
pub fn run(ctx: &CommandContext, cmd: &WordsCommand) -> ExitCode {
    let index = match ctx.open_index(&cmd.source) {
        Ok(index) => index,
        Err(code) => return code,
    };

    println!(
        "{}",
        dim(&format!(
            "{} lines, {} distinct words",
            index.line_count(),
            index.word_count()
        ))
    );

    let rows = ranked_words(&index, cmd.top);
    if rows.is_empty() {
        println!("{}", dim("No words indexed."));
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Word", "Lines"]);
    for (word, lines) in rows {
        table.add_row(vec![
            Cell::new(word),
            Cell::new(lines.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}

/// Words with their line counts.
///
/// Without `top` the words stay in lexical order. With `top` they are ranked by
/// line count, ties broken lexically, and cut to the first `top`.
fn ranked_words(index: &TextIndex, top: Option<usize>) -> Vec<(&str, usize)> {
    let mut rows: Vec<(&str, usize)> = index
        .words()
        .map(|(word, lines)| (word, lines.len()))
        .collect();

    if let Some(top) = top {
        rows.sort_by_key(|&(word, count)| (Reverse(count), word));
        rows.truncate(top);
    }
    rows
}
