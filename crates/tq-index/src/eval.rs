//! Query evaluation.
//!
//! Evaluation is eager and bottom-up: each operand is evaluated exactly once
//! to a concrete [`QueryResult`] before its parent combines them.

use std::borrow::Cow;

use tq_query::{Query, QueryNode, quote_word};
use tracing::{debug, trace};

use crate::{LineSet, QueryResult, TextIndex};

/// Evaluates `query` against `index`.
///
/// The result is labelled with the query's rendering.
pub fn evaluate(query: &Query, index: &TextIndex) -> QueryResult {
    let result = eval_node(query, index);
    debug!(query = %result.sought(), matches = result.len(), "evaluated query");
    result
}

/// Evaluates one node and, recursively, its operands.
///
/// Labels are assembled from the operands' labels, so each node is rendered
/// once and the label matches `query.render()`.
fn eval_node(query: &Query, index: &TextIndex) -> QueryResult {
    let result = match query.node() {
        QueryNode::Word(word) => {
            let found = index.lookup(word);
            match quote_word(word) {
                Cow::Borrowed(_) => found,
                Cow::Owned(label) => found.relabel(label),
            }
        }
        QueryNode::Not(inner) => {
            let operand = eval_node(inner, index);
            let label = format!("~({})", operand.sought());
            QueryResult::complement(label, &operand)
        }
        QueryNode::And(left, right) => {
            let left = eval_node(left, index);
            let right = eval_node(right, index);
            let label = format!("({} & {})", left.sought(), right.sought());
            QueryResult::combine(label, &left, &right, LineSet::intersection)
        }
        QueryNode::Or(left, right) => {
            let left = eval_node(left, index);
            let right = eval_node(right, index);
            let label = format!("({} | {})", left.sought(), right.sought());
            QueryResult::combine(label, &left, &right, LineSet::union)
        }
    };
    trace!(node = %result.sought(), matches = result.len(), "evaluated node");
    result
}

/// Method-call form of [`evaluate`].
pub trait Evaluate {
    /// Evaluates this expression against `index`.
    fn eval(&self, index: &TextIndex) -> QueryResult;
}

impl Evaluate for Query {
    fn eval(&self, index: &TextIndex) -> QueryResult {
        evaluate(self, index)
    }
}
