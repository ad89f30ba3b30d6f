//! Query parser.
//!
//! Parses a token stream into a [`Query`] using recursive descent.
//!
//! # Grammar
//!
//! ```text
//! query    → or_expr
//! or_expr  → and_expr ("|" and_expr)*
//! and_expr → unary ("&"? unary)*
//! unary    → "~" unary | primary
//! primary  → WORD | "(" or_expr ")"
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. Negation: `~`
//! 3. AND: `&`, or implicit between adjacent operands
//! 4. OR: `|`
//!
//! Binary operators associate to the left, so `a & b & c` is `((a & b) & c)`.

use std::mem;

use crate::{
    ast::Query,
    error::{ParseError, QueryError},
    lexer::{Token, tokenize_with_positions},
};

/// Deepest nesting of `~` and parentheses a query may use.
///
/// Parsing, evaluation and rendering all recurse once per level.
pub const MAX_NESTING: usize = 256;

/// Recursive descent parser for query expressions.
struct Parser {
    /// Token stream to parse.
    tokens: Vec<Token>,
    /// Current position in token stream.
    position: usize,
    /// Open `~` and `(` levels at the current position.
    depth: usize,
}

impl Parser {
    /// Creates a new parser from a token stream.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parses the token stream into a query expression.
    fn parse(mut self) -> Result<Option<Query>, ParseError> {
        if self.tokens.is_empty() {
            return Ok(None);
        }

        let expr = self.parse_or_expr()?;

        if let Some(token) = self.peek() {
            let message = match token {
                Token::RParen => "unexpected closing parenthesis".to_string(),
                other => format!("unexpected token: {other:?}"),
            };
            return Err(ParseError::new(message, Some(self.position)));
        }

        Ok(Some(expr))
    }

    /// Parses: or_expr → and_expr ("|" and_expr)*
    fn parse_or_expr(&mut self) -> Result<Query, ParseError> {
        let mut left = self.parse_and_expr()?;

        while self.check(&Token::Or) {
            self.advance(); // consume |
            let right = self.parse_and_expr()?;
            left = left | right;
        }

        Ok(left)
    }

    /// Parses: and_expr → unary ("&"? unary)*
    fn parse_and_expr(&mut self) -> Result<Query, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            if self.check(&Token::And) {
                self.advance(); // consume &
            } else if !self.can_start_unary() {
                break;
            }
            let right = self.parse_unary()?;
            left = left & right;
        }

        Ok(left)
    }

    /// Checks if the current token can start a unary expression.
    fn can_start_unary(&self) -> bool {
        matches!(
            self.peek(),
            Some(Token::Word(_) | Token::Not | Token::LParen)
        )
    }

    /// Parses: unary → "~" unary | primary
    fn parse_unary(&mut self) -> Result<Query, ParseError> {
        if self.check(&Token::Not) {
            self.descend()?;
            self.advance(); // consume ~
            let expr = self.parse_unary()?;
            self.depth -= 1;
            return Ok(!expr);
        }

        self.parse_primary()
    }

    /// Parses: primary → WORD | "(" or_expr ")"
    fn parse_primary(&mut self) -> Result<Query, ParseError> {
        match self.peek().cloned() {
            Some(Token::Word(word)) => {
                self.advance();
                Ok(Query::word(word))
            }

            Some(Token::LParen) => self.parse_group(),

            Some(Token::RParen) => Err(ParseError::new(
                "unexpected closing parenthesis",
                Some(self.position),
            )),

            Some(Token::And) => Err(ParseError::new(
                "unexpected '&' (needs expression before it)",
                Some(self.position),
            )),

            Some(Token::Or) => Err(ParseError::new(
                "unexpected '|' (needs expression before it)",
                Some(self.position),
            )),

            // parse_unary consumes every '~' before reaching here
            Some(Token::Not) => Err(ParseError::new("unexpected negation", Some(self.position))),

            None => Err(ParseError::new("unexpected end of query", None)),
        }
    }

    /// Parses a parenthesized group, consuming the surrounding parentheses.
    fn parse_group(&mut self) -> Result<Query, ParseError> {
        let open = self.position;
        self.descend()?;
        self.advance(); // consume (

        if self.check(&Token::RParen) {
            return Err(ParseError::new("empty parentheses", Some(open)));
        }

        let inner = self.parse_or_expr()?;

        if !self.check(&Token::RParen) {
            return Err(ParseError::new(
                "expected closing parenthesis",
                Some(self.position),
            ));
        }
        self.advance(); // consume )
        self.depth -= 1;

        Ok(inner)
    }

    /// Enters one nesting level, failing past [`MAX_NESTING`].
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::new(
                "query nested too deeply",
                Some(self.position),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Checks if the current token matches the given token.
    fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| mem::discriminant(t) == mem::discriminant(token))
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Parses a query string into a [`Query`].
///
/// Returns `Ok(None)` for empty queries, `Ok(Some(query))` for valid queries,
/// or `Err(QueryError)` for invalid syntax. Errors carry the input and the byte
/// position of the offending token (the end of input for truncated queries).
pub fn parse(input: &str) -> Result<Option<Query>, QueryError> {
    let (tokens, offsets): (Vec<Token>, Vec<usize>) =
        tokenize_with_positions(input)?.into_iter().unzip();

    Parser::new(tokens).parse().map_err(|err| {
        let end = input.trim_end().len();
        let position = err
            .token_index
            .and_then(|idx| offsets.get(idx).copied())
            .unwrap_or(end);
        QueryError::parse(err.message, Some(position), Some(input.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    /// Parses and renders, panicking on errors or empty input.
    fn rendered(input: &str) -> String {
        parse(input).unwrap().unwrap().render()
    }

    #[test]
    fn empty_query() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("   ").unwrap().is_none());
    }

    #[test]
    fn single_word() {
        assert_eq!(rendered("fox"), "fox");
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(rendered("a & b | c"), "((a & b) | c)");
        assert_eq!(rendered("a | b & c"), "(a | (b & c))");
    }

    #[test]
    fn binary_operators_are_left_associative() {
        assert_eq!(rendered("a & b & c"), "((a & b) & c)");
        assert_eq!(rendered("a | b | c"), "((a | b) | c)");
    }

    #[test]
    fn implicit_and_between_adjacent_operands() {
        assert_eq!(rendered("alpha gamma"), "(alpha & gamma)");
        assert_eq!(rendered("a ~b"), "(a & ~(b))");
        assert_eq!(rendered("a (b | c)"), "(a & (b | c))");
    }

    #[test]
    fn negation_binds_tightest() {
        assert_eq!(rendered("~a & b"), "(~(a) & b)");
        assert_eq!(rendered("~(a & b)"), "~((a & b))");
        assert_eq!(rendered("~~a"), "~(~(a))");
    }

    #[test]
    fn grouping_overrides_precedence() {
        assert_eq!(rendered("a & (b | c)"), "(a & (b | c))");
        assert_eq!(rendered("((a))"), "a");
    }

    #[test]
    fn parsed_matches_built() {
        let built = Query::word("a") & (Query::word("b") | !Query::word("c"));
        assert_eq!(rendered("a & (b | ~c)"), built.render());
    }

    #[test]
    fn quoted_word_is_literal() {
        assert_eq!(rendered("\"x&y\" | z"), "(\"x&y\" | z)");
    }

    #[test]
    fn rendering_reparses_to_the_same_query() {
        for input in ["\"x&y\" | z", "~\"(a)\" \"b|c\"", "a & (b | ~c)"] {
            let once = rendered(input);
            assert_eq!(rendered(&once), once);
        }
    }

    #[test]
    fn deep_negation_is_rejected() {
        let input = format!("{}a", "~".repeat(10_000));
        let err = parse(&input).unwrap_err();
        assert_eq!(err.message(), "query nested too deeply");
        assert_eq!(err.position(), Some(MAX_NESTING));
    }

    #[test]
    fn deep_parentheses_are_rejected() {
        let input = format!("{}a{}", "(".repeat(5_000), ")".repeat(5_000));
        let err = parse(&input).unwrap_err();
        assert_eq!(err.message(), "query nested too deeply");
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        let negations = format!("{}a", "~".repeat(MAX_NESTING));
        assert!(parse(&negations).unwrap().is_some());

        let half = MAX_NESTING / 2;
        let mixed = format!("{}a{}", "~(".repeat(half), ")".repeat(half));
        assert!(parse(&mixed).unwrap().is_some());
    }

    #[test]
    fn nesting_depth_resets_between_siblings() {
        let group = format!("{}a{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
        let input = format!("{group} | {group} & {group}");
        assert!(parse(&input).unwrap().is_some());
    }

    #[test]
    fn error_unclosed_paren() {
        let err = parse("(a & b").unwrap_err();
        assert!(err.message().contains("closing parenthesis"));
        assert_eq!(err.position(), Some(6));
    }

    #[test]
    fn error_unexpected_rparen() {
        let err = parse("a)").unwrap_err();
        assert!(err.message().contains("unexpected closing parenthesis"));
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn error_operator_at_start() {
        let err = parse("& a").unwrap_err();
        assert!(err.message().contains("'&'"));
        assert_eq!(err.position(), Some(0));

        let err = parse("| a").unwrap_err();
        assert!(err.message().contains("'|'"));
    }

    #[test]
    fn error_operator_at_end() {
        let err = parse("a | ").unwrap_err();
        assert!(err.message().contains("end of query"));
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn error_doubled_operator() {
        let err = parse("a & & b").unwrap_err();
        assert!(err.message().contains("'&'"));
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn error_empty_group() {
        let err = parse("a & ()").unwrap_err();
        assert!(err.message().contains("empty parentheses"));
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn error_lex_passes_through() {
        let err = parse("a | \"b").unwrap_err();
        assert!(err.message().contains("unclosed"));
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn performance_many_queries() {
        let queries = [
            "fox",
            "fox & jumps",
            "~gamma",
            "alpha | beta | gamma",
            "(a & b) | (c & d)",
            "a & ~(b | c) & (d | ~e)",
            "((a | b) & c) | ((d | e) & f) & ~g",
        ];

        let start = Instant::now();
        for _ in 0..1000 {
            for query in &queries {
                let _ = parse(query).unwrap();
            }
        }
        let elapsed = start.elapsed();

        assert!(
            elapsed.as_millis() < 1000,
            "Parsing 7,000 queries took {elapsed:?}, expected < 1s"
        );
    }
}
