//! Terminal styling for tq.
//!
//! Two concerns live here: TOML syntax highlighting for the `init` and
//! `config` commands, and the ANSI styles used in query reports.

#![warn(missing_docs)]

use syntect::{
    easy::HighlightLines,
    parsing::{SyntaxReference, SyntaxSet},
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Resets all ANSI attributes.
const RESET: &str = "\x1b[0m";

/// Highlights TOML documents for the terminal.
pub struct Highlighter {
    /// Grammars bundled by two-face; TOML is not among syntect's defaults.
    syntax_set: SyntaxSet,
    /// Lazily decoded themes.
    theme_set: EmbeddedLazyThemeSet,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Loads the bundled grammars and themes.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
        }
    }

    /// The TOML grammar, or plain text if the bundle lacks it.
    fn toml_syntax(&self) -> &SyntaxReference {
        self.syntax_set
            .find_syntax_by_extension("toml")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text())
    }

    /// Returns `content` with 24-bit color escapes, ending in a reset.
    ///
    /// Lines the highlighter chokes on are passed through unstyled.
    pub fn highlight_toml(&self, content: &str) -> String {
        let theme = self.theme_set.get(EmbeddedThemeName::Dracula);
        let mut lines = HighlightLines::new(self.toml_syntax(), theme);

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            match lines.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => output.push_str(&as_24_bit_terminal_escaped(&ranges, false)),
                Err(_) => output.push_str(line),
            }
        }
        output.push_str(RESET);
        output
    }
}

/// Wraps `text` in the given escape prefix and a reset.
fn paint(prefix: &str, text: &str) -> String {
    format!("{prefix}{text}{RESET}")
}

/// Bold cyan, for report headlines and section titles.
pub fn header(text: &str) -> String {
    paint("\x1b[1;36m", text)
}

/// Faint text for summaries and hints.
pub fn dim(text: &str) -> String {
    paint("\x1b[2m", text)
}

/// Green, for completed actions.
pub fn success(text: &str) -> String {
    paint("\x1b[32m", text)
}

/// Bold yellow, for words a query matched.
pub fn matched(text: &str) -> String {
    paint("\x1b[1;33m", text)
}

/// Highlights every whitespace-delimited token of `line` that equals one of `words`.
///
/// Tokens are compared exactly, the same way the index tokenizes lines, so
/// `fox,` does not match `fox`. Whitespace is copied through unchanged.
pub fn highlight_words(line: &str, words: &[&str]) -> String {
    let mut output = String::with_capacity(line.len());
    let mut rest = line;

    while !rest.is_empty() {
        let space_end = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (space, tail) = rest.split_at(space_end);
        output.push_str(space);

        let token_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (token, tail) = tail.split_at(token_end);
        if !token.is_empty() && words.contains(&token) {
            output.push_str(&matched(token));
        } else {
            output.push_str(token);
        }
        rest = tail;
    }

    output
}
