//! Plain-text rendering of query results.
//!
//! ```text
//! fox occurs 2 times
//! 	(line 1) fox jumps
//! 	(line 2) the fox runs
//! ```

use std::fmt;

use crate::QueryResult;

/// Returns `"<sought> occurs N time"` or `"... times"` for any N other than 1.
pub fn headline(result: &QueryResult) -> String {
    let count = result.len();
    let noun = if count == 1 { "time" } else { "times" };
    format!("{} occurs {count} {noun}", result.sought())
}

/// Formats one matching line with its 1-based line number.
pub fn format_line(line_no: usize, text: &str) -> String {
    format!("\t(line {}) {text}", line_no + 1)
}

/// Renders the full report for a result.
pub fn render(result: &QueryResult) -> String {
    Report::new(result).to_string()
}

/// A displayable report over a result, optionally truncated.
pub struct Report<'a> {
    /// The result being rendered.
    result: &'a QueryResult,
    /// Maximum matching lines to list; `None` lists all.
    limit: Option<usize>,
}

impl<'a> Report<'a> {
    /// Creates a report listing every matching line.
    pub fn new(result: &'a QueryResult) -> Self {
        Self {
            result,
            limit: None,
        }
    }

    /// Lists at most `limit` lines; zero means no limit.
    ///
    /// The headline always reports the full count.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", headline(self.result))?;

        let shown = self.limit.unwrap_or(usize::MAX);
        for (line_no, text) in self.result.matches().take(shown) {
            writeln!(f, "{}", format_line(line_no, text))?;
        }

        let hidden = self.result.len().saturating_sub(shown);
        if hidden > 0 {
            writeln!(f, "\t... and {hidden} more")?;
        }

        Ok(())
    }
}
