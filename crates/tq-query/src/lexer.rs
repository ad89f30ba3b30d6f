//! Query lexer (tokenizer).
//!
//! Converts a query string into a stream of tokens for the parser.

use std::{iter::Peekable, str::Chars};

use crate::{ast::OPERATOR_CHARS, error::LexError};

/// A token in the query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word to look up, either bare or quoted (quotes stripped).
    Word(String),

    /// Negation prefix (`~`).
    Not,

    /// Conjunction (`&`).
    And,

    /// Disjunction (`|`).
    Or,

    /// Left parenthesis.
    LParen,

    /// Right parenthesis.
    RParen,
}

/// Returns true for characters that end a bare word.
fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || ch == '"' || OPERATOR_CHARS.contains(&ch)
}

/// Tokenizes a query string.
struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Creates an error at a specific position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> LexError {
        LexError::new(message, position, self.input)
    }

    /// Tokenizes the entire input, pairing each token with its byte offset.
    fn tokenize(mut self) -> Result<Vec<(Token, usize)>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let start = self.position;
            match self.next_token()? {
                Some(token) => tokens.push((token, start)),
                None => break,
            }
        }

        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        let Some(&ch) = self.chars.peek() else {
            return Ok(None);
        };

        let simple = match ch {
            '~' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '"' => return self.read_quoted().map(Some),
            _ => return Ok(Some(self.read_word())),
        };
        self.advance();
        Ok(Some(simple))
    }

    /// Reads a quoted word.
    ///
    /// Indexed words never contain whitespace, so a quoted word that does is
    /// rejected rather than silently matching nothing.
    fn read_quoted(&mut self) -> Result<Token, LexError> {
        let start_pos = self.position;
        self.advance(); // consume opening quote

        let mut content = String::new();

        loop {
            match self.chars.peek() {
                Some(&'"') => {
                    self.advance(); // consume closing quote
                    break;
                }
                Some(&ch) if ch.is_whitespace() => {
                    return Err(self.error_at("whitespace inside quoted word", self.position));
                }
                Some(&ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(self.error_at("unclosed quote", start_pos)),
            }
        }

        if content.is_empty() {
            return Err(self.error_at("empty quoted word", start_pos));
        }

        Ok(Token::Word(content))
    }

    /// Reads a bare word up to the next delimiter.
    fn read_word(&mut self) -> Token {
        let mut word = String::new();

        while let Some(&ch) = self.chars.peek() {
            if is_delimiter(ch) {
                break;
            }
            word.push(ch);
            self.advance();
        }

        Token::Word(word)
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.position += ch.len_utf8();
        }
    }
}

/// Tokenizes a query string, keeping the byte offset at which each token starts.
pub(crate) fn tokenize_with_positions(input: &str) -> Result<Vec<(Token, usize)>, LexError> {
    Lexer::new(input).tokenize()
}

/// Convenience function to tokenize a query string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_with_positions(input)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}
