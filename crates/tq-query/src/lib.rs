//! Boolean query algebra for tq.
//!
//! Queries are trees of four node kinds:
//!
//! - **Word**: `fox` - lines containing the exact token
//! - **Not**: `~fox` - lines not matched by the operand
//! - **And**: `fox & jumps` - lines matched by both operands
//! - **Or**: `fox | jumps` - lines matched by either operand
//!
//! Expressions are built with [`Query::word`] and the `!`, `&`, `|` operators,
//! or parsed from text with [`parse`]. Evaluation against an index lives in
//! `tq-index`.
//!
//! # Example
//!
//! ```
//! use tq_query::{Query, parse};
//!
//! let built = Query::word("a") & (Query::word("b") | Query::word("c"));
//! assert_eq!(built.to_string(), "(a & (b | c))");
//!
//! let parsed = parse("a & (b | c)").unwrap().unwrap();
//! assert_eq!(parsed.to_string(), built.to_string());
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::{Query, QueryNode, quote_word};
pub use error::{LexError, ParseError, QueryError, QueryErrorKind};
pub use lexer::{Token, tokenize};
pub use parser::{MAX_NESTING, parse};
