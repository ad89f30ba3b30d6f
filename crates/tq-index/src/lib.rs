//! Line-indexed text search for tq.
//!
//! This crate builds an inverted index over the lines of one text source and
//! evaluates `tq-query` expressions against it:
//! - [`TextIndex`] reads the source once, keeping a shared [`LineStore`] and a
//!   word → [`LineSet`] map
//! - [`evaluate`] reduces a [`Query`] tree to a [`QueryResult`] with ordered
//!   set merges
//! - [`render`] and [`Report`] format a result for display
//!
//! # Example
//!
//! ```
//! use tq_index::{Evaluate, Query, TextIndex, render};
//!
//! let index = TextIndex::from_lines(["alpha beta", "beta gamma", "alpha gamma"]);
//! let result = (Query::word("alpha") & Query::word("gamma")).eval(&index);
//!
//! assert_eq!(result.lines().as_slice(), &[2]);
//! assert_eq!(
//!     render(&result),
//!     "(alpha & gamma) occurs 1 time\n\t(line 3) alpha gamma\n"
//! );
//! ```

#![warn(missing_docs)]

mod error;
mod eval;
mod index;
mod line_set;
mod lines;
mod report;
mod result;

pub use error::IndexError;
pub use eval::{Evaluate, evaluate};
pub use index::TextIndex;
pub use line_set::LineSet;
pub use lines::LineStore;
pub use report::{Report, format_line, headline, render};
pub use result::QueryResult;
pub use tq_query::{Query, QueryError, QueryNode, parse};
