//! Error types for query parsing.
//!
//! This module provides error types for lexing and parsing query expressions.

use std::{error::Error, fmt};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Error message.
    pub message: String,
    /// Byte position in input where error occurred.
    pub position: usize,
    /// The original input string.
    pub input: String,
}

impl LexError {
    /// Creates a new lexer error.
    pub fn new(message: impl Into<String>, position: usize, input: &str) -> Self {
        Self {
            message: message.into(),
            position,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.message, self.position)
    }
}

impl Error for LexError {}

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Token index where error occurred (if applicable).
    pub token_index: Option<usize>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>, token_index: Option<usize>) -> Self {
        Self {
            message: message.into(),
            token_index,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(idx) = self.token_index {
            write!(f, "at token {}: {}", idx, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl Error for ParseError {}

/// A unified error type for query parsing.
///
/// Carries the original query string and a byte position where available, so
/// the error can be displayed with a pointer under the offending character.
#[derive(Debug, Clone)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: QueryErrorKind,
    /// The original query string (if available).
    pub query: Option<String>,
}

/// The specific kind of query error.
#[derive(Debug, Clone)]
pub enum QueryErrorKind {
    /// Lexer error (tokenization failed).
    Lex {
        /// Error message.
        message: String,
        /// Byte position in input.
        position: usize,
    },
    /// Parser error (invalid syntax).
    Parse {
        /// Error message.
        message: String,
        /// Byte position in input (if available).
        position: Option<usize>,
    },
}

impl QueryError {
    /// Creates a lex error.
    pub fn lex(message: impl Into<String>, position: usize, query: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Lex {
                message: message.into(),
                position,
            },
            query: Some(query.into()),
        }
    }

    /// Creates a parse error.
    pub fn parse(
        message: impl Into<String>,
        position: Option<usize>,
        query: Option<String>,
    ) -> Self {
        Self {
            kind: QueryErrorKind::Parse {
                message: message.into(),
                position,
            },
            query,
        }
    }

    /// Returns the error message without context.
    pub fn message(&self) -> &str {
        match &self.kind {
            QueryErrorKind::Lex { message, .. } | QueryErrorKind::Parse { message, .. } => message,
        }
    }

    /// Returns the byte position of the error, if known.
    pub fn position(&self) -> Option<usize> {
        match &self.kind {
            QueryErrorKind::Lex { position, .. } => Some(*position),
            QueryErrorKind::Parse { position, .. } => *position,
        }
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        let message = self.message();
        match &self.kind {
            QueryErrorKind::Lex { .. } if message.contains("unclosed quote") => {
                Some("Add a closing quote (\") to complete the word")
            }
            QueryErrorKind::Lex { .. } if message.contains("whitespace") => {
                Some("Words never contain whitespace; combine them with & or | instead")
            }
            QueryErrorKind::Parse { .. } if message.contains("closing parenthesis") => {
                Some("Add a closing parenthesis ) to match the opening one")
            }
            QueryErrorKind::Parse { .. } if message.contains("'&'") || message.contains("'|'") => {
                Some("& and | need expressions on both sides, e.g. 'fox & jumps'")
            }
            _ => None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query syntax error: {}", self.message())?;

        if let Some(query) = &self.query {
            writeln!(f, "  {query}")?;
            if let Some(pos) = self.position() {
                let clamped = pos.min(query.len());
                writeln!(f, "  {}^", " ".repeat(clamped))?;
            }
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "hint: {suggestion}")?;
        }

        Ok(())
    }
}

impl Error for QueryError {}

impl From<LexError> for QueryError {
    fn from(err: LexError) -> Self {
        Self {
            kind: QueryErrorKind::Lex {
                message: err.message,
                position: err.position,
            },
            query: Some(err.input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = QueryError::lex("unclosed quote", 4, "a & \"bc");
        let display = err.to_string();
        assert!(display.contains("unclosed quote"));
        assert!(display.contains("a & \"bc"));
        assert!(display.contains("      ^"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn parse_error_display() {
        let err = QueryError::parse(
            "expected closing parenthesis",
            Some(5),
            Some("(a & b".to_string()),
        );
        let display = err.to_string();
        assert!(display.contains("expected closing parenthesis"));
        assert!(display.contains("(a & b"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn position_is_clamped_to_query_length() {
        let err = QueryError::parse("unexpected end of query", Some(99), Some("a &".into()));
        let display = err.to_string();
        assert!(display.contains("     ^"));
        assert!(!display.contains("      ^"));
    }

    #[test]
    fn operator_error_suggestion() {
        let err = QueryError::parse("unexpected '&' (needs expression before it)", None, None);
        assert!(err.suggestion().unwrap().contains("both sides"));
    }

    #[test]
    fn lex_error_converts_with_input() {
        let err: QueryError = LexError::new("unclosed quote", 2, "a \"b").into();
        assert_eq!(err.position(), Some(2));
        assert_eq!(err.query.as_deref(), Some("a \"b"));
    }
}
