//! Inverted index construction and word lookup.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use tq_query::Query;
use tracing::debug;

use crate::{IndexError, LineSet, LineStore, QueryResult, eval::evaluate};

/// A line store paired with the inverted index built from it.
///
/// Words are exact whitespace-delimited tokens: no case folding and no
/// punctuation stripping, so `Fox` and `fox,` are distinct from `fox`.
#[derive(Debug)]
pub struct TextIndex {
    /// Source lines, shared with every result.
    lines: Arc<LineStore>,
    /// Word to the lines containing it. Every entry is non-empty.
    words: BTreeMap<String, LineSet>,
}

impl TextIndex {
    /// Builds an index by reading `reader` to the end.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. Any read error,
    /// including invalid UTF-8, aborts the build.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, IndexError> {
        let mut builder = IndexBuilder::default();
        for line in reader.lines() {
            builder.add_line(line?);
        }
        Ok(builder.finish())
    }

    /// Builds an index from the file at `path`.
    pub fn from_path(path: &Path) -> Result<Self, IndexError> {
        let read_error = |source| IndexError::ReadFile {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        let mut builder = IndexBuilder::default();
        for line in BufReader::new(file).lines() {
            builder.add_line(line.map_err(read_error)?);
        }
        Ok(builder.finish())
    }

    /// Builds an index from in-memory lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = IndexBuilder::default();
        for line in lines {
            builder.add_line(line.into());
        }
        builder.finish()
    }

    /// Looks up a single word.
    ///
    /// An absent word yields an empty result, never an error.
    pub fn lookup(&self, word: &str) -> QueryResult {
        let lines = self.words.get(word).cloned().unwrap_or_default();
        QueryResult::new(word.to_string(), lines, Arc::clone(&self.lines))
    }

    /// Evaluates a query expression against this index.
    pub fn evaluate(&self, query: &Query) -> QueryResult {
        evaluate(query, self)
    }

    /// Returns the shared line store.
    pub fn lines(&self) -> &Arc<LineStore> {
        &self.lines
    }

    /// Returns the number of indexed lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the text of line `n`, if it exists.
    pub fn line(&self, n: usize) -> Option<&str> {
        self.lines.get(n)
    }

    /// Iterates indexed words and their line sets in lexical order.
    pub fn words(&self) -> impl Iterator<Item = (&str, &LineSet)> {
        self.words.iter().map(|(word, lines)| (word.as_str(), lines))
    }
}

/// Accumulates lines and postings in a single pass.
#[derive(Default)]
struct IndexBuilder {
    /// Lines read so far.
    lines: LineStore,
    /// Postings collected so far.
    words: BTreeMap<String, LineSet>,
}

impl IndexBuilder {
    /// Stores a line and records each of its tokens.
    fn add_line(&mut self, text: String) {
        let line_no = self.lines.len();
        for token in text.split_whitespace() {
            if let Some(lines) = self.words.get_mut(token) {
                lines.push_ascending(line_no);
            } else {
                let mut lines = LineSet::new();
                lines.push_ascending(line_no);
                self.words.insert(token.to_string(), lines);
            }
        }
        self.lines.push(text);
    }

    /// Freezes the collected state into an index.
    fn finish(self) -> TextIndex {
        debug!(
            lines = self.lines.len(),
            words = self.words.len(),
            "built text index"
        );
        TextIndex {
            lines: Arc::new(self.lines),
            words: self.words,
        }
    }
}
