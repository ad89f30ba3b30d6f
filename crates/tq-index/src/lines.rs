//! The immutable line store shared by an index and its results.

/// The ordered lines of one input source, 0-indexed.
///
/// A store is populated once by [`crate::TextIndex`] and then shared behind an
/// `Arc` with every [`crate::QueryResult`] derived from that index.
#[derive(Debug, Default)]
pub struct LineStore {
    /// Line text without terminators.
    lines: Vec<String>,
}

impl LineStore {
    /// Appends a line during a build pass.
    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the source had no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the text of line `n`, if it exists.
    pub fn get(&self, n: usize) -> Option<&str> {
        self.lines.get(n).map(String::as_str)
    }

    /// Iterates lines in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
