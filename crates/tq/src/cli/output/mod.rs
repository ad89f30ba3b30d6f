//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use serde::Serialize;
pub use tq_highlight::{dim, header, success};
use tq_highlight::highlight_words;
use tq_index::{Query, QueryResult, Report, format_line, headline};

/// How reports are rendered for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    /// Emit ANSI colors and highlight matched words.
    pub color: bool,
    /// Maximum matching lines listed (0 = unlimited).
    pub max_lines: usize,
}

/// Formats the report for one evaluated query.
///
/// Without color this is exactly the plain report. With color the headline is
/// styled and the words the query looks for are highlighted in each line.
pub fn format_report(query: &Query, result: &QueryResult, style: ReportStyle) -> String {
    if !style.color {
        return Report::new(result).with_limit(style.max_lines).to_string();
    }

    let words = query.positive_words();
    let shown = if style.max_lines == 0 {
        usize::MAX
    } else {
        style.max_lines
    };

    let mut out = header(&headline(result));
    out.push('\n');
    for (line_no, text) in result.matches().take(shown) {
        out.push_str(&format_line(line_no, &highlight_words(text, &words)));
        out.push('\n');
    }
    let hidden = result.len().saturating_sub(shown);
    if hidden > 0 {
        out.push_str(&dim(&format!("\t... and {hidden} more")));
        out.push('\n');
    }
    out
}

/// One matching line in JSON output.
#[derive(Debug, Serialize)]
struct JsonLine {
    /// 1-based line number.
    line: usize,
    /// Line text.
    text: String,
}

/// JSON output for a single query.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Rendered query label.
    query: String,
    /// Total number of matching lines.
    count: usize,
    /// Listed matching lines, possibly truncated.
    lines: Vec<JsonLine>,
}

impl JsonReport {
    /// Builds the JSON form of a result, listing at most `max_lines` lines (0 = all).
    pub fn new(result: &QueryResult, max_lines: usize) -> Self {
        let shown = if max_lines == 0 { usize::MAX } else { max_lines };
        Self {
            query: result.sought().to_string(),
            count: result.len(),
            lines: result
                .matches()
                .take(shown)
                .map(|(line_no, text)| JsonLine {
                    line: line_no + 1,
                    text: text.to_string(),
                })
                .collect(),
        }
    }
}

/// JSON output for `tq query`.
#[derive(Serialize)]
struct JsonQueryOutput {
    /// One report per expression, in argument order.
    reports: Vec<JsonReport>,
}

/// Prints reports as pretty JSON.
pub fn print_json(reports: Vec<JsonReport>) -> ExitCode {
    match serde_json::to_string_pretty(&JsonQueryOutput { reports }) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
