//! Evaluated query results.

use std::sync::Arc;

use crate::{LineSet, LineStore};

/// The outcome of evaluating a query.
///
/// Holds the label of what was sought (a word or a rendered expression), the
/// matching lines, and the line store of the index that produced it. Results
/// are immutable and cheap to clone; the store is shared, never copied.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Word or rendered expression that produced this result.
    sought: String,
    /// Matching line numbers.
    lines: LineSet,
    /// Store the line numbers refer to.
    store: Arc<LineStore>,
}

impl QueryResult {
    /// Creates a result over `store`.
    pub(crate) fn new(sought: String, lines: LineSet, store: Arc<LineStore>) -> Self {
        debug_assert!(
            lines.last().is_none_or(|last| last < store.len()),
            "line numbers must index into the store"
        );
        Self {
            sought,
            lines,
            store,
        }
    }

    /// Returns the word or expression that was sought.
    pub fn sought(&self) -> &str {
        &self.sought
    }

    /// Returns the matching line numbers.
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// Returns the line store the result refers to.
    pub fn store(&self) -> &Arc<LineStore> {
        &self.store
    }

    /// Returns the number of matching lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no line matched.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if both results were produced from the same index.
    pub fn shares_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }

    /// Iterates matching lines as `(line number, text)` in ascending order.
    ///
    /// Line numbers are 0-based.
    pub fn matches(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .filter_map(|n| self.store.get(n).map(|text| (n, text)))
    }

    /// Replaces the label, keeping the matches.
    pub(crate) fn relabel(self, sought: String) -> Self {
        Self { sought, ..self }
    }

    /// Builds a result labelled `sought` from two operand results.
    ///
    /// Both operands must come from the same index. Evaluation only ever
    /// combines results of one tree against one index, so a mismatch is a
    /// caller bug and is caught by a debug assertion.
    pub(crate) fn combine(
        sought: String,
        left: &Self,
        right: &Self,
        op: impl FnOnce(&LineSet, &LineSet) -> LineSet,
    ) -> Self {
        debug_assert!(
            left.shares_store(right),
            "cannot combine results from different indexes"
        );
        Self::new(sought, op(&left.lines, &right.lines), Arc::clone(&left.store))
    }

    /// Builds the complement of `operand` against its whole store.
    pub(crate) fn complement(sought: String, operand: &Self) -> Self {
        let lines = operand.lines.complement(operand.store.len());
        Self::new(sought, lines, Arc::clone(&operand.store))
    }
}
