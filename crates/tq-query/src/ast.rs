//! Query expression tree.
//!
//! A [`Query`] is a cheap, clonable handle to an immutable [`QueryNode`]. The
//! composition operators never modify their operands; they allocate a new node
//! that shares the operands, so one subexpression can sit under any number of
//! parents.

use std::{
    borrow::Cow,
    fmt,
    ops::{BitAnd, BitOr, Not},
    sync::Arc,
};

/// Characters that end a bare word in query text.
pub(crate) const OPERATOR_CHARS: [char; 5] = ['~', '&', '|', '(', ')'];

/// Renders `word` so that parsing the result yields the same word.
///
/// Words holding operator characters come back quoted. Parsed words never hold
/// whitespace or `"`; words built with those are returned bare, as no query
/// text can express them.
pub fn quote_word(word: &str) -> Cow<'_, str> {
    let quotable = !word.contains(|c: char| c.is_whitespace() || c == '"');
    if quotable && word.contains(OPERATOR_CHARS) {
        Cow::Owned(format!("\"{word}\""))
    } else {
        Cow::Borrowed(word)
    }
}

/// One node of a boolean query expression.
#[derive(Debug)]
pub enum QueryNode {
    /// Lines containing this exact whitespace-delimited token.
    Word(String),

    /// Lines not matched by the operand.
    Not(Query),

    /// Lines matched by both operands.
    And(Query, Query),

    /// Lines matched by at least one operand.
    Or(Query, Query),
}

/// A handle to a query expression.
///
/// Rendering via [`fmt::Display`] is structural: words render as themselves
/// (see [`quote_word`]), negation as `~(q)`, and binary nodes as `(l & r)` or
/// `(l | r)`.
#[derive(Debug, Clone)]
pub struct Query {
    /// The shared root node of this expression.
    node: Arc<QueryNode>,
}

impl Query {
    /// Wraps a node in a new handle.
    fn from_node(node: QueryNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Creates a query matching lines that contain `word`.
    pub fn word(word: impl Into<String>) -> Self {
        Self::from_node(QueryNode::Word(word.into()))
    }

    /// Creates the complement of this query.
    pub fn negate(&self) -> Self {
        Self::from_node(QueryNode::Not(self.clone()))
    }

    /// Creates the conjunction of this query and `other`.
    pub fn and(&self, other: &Self) -> Self {
        Self::from_node(QueryNode::And(self.clone(), other.clone()))
    }

    /// Creates the disjunction of this query and `other`.
    pub fn or(&self, other: &Self) -> Self {
        Self::from_node(QueryNode::Or(self.clone(), other.clone()))
    }

    /// Returns the root node of this expression.
    pub fn node(&self) -> &QueryNode {
        &self.node
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Returns the structural rendering of this expression.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Returns the distinct words that a matching line may contain.
    ///
    /// Words under an odd number of negations are skipped, since lines matched
    /// through them are exactly the lines that lack the word. Order follows a
    /// left-to-right walk of the tree.
    pub fn positive_words(&self) -> Vec<&str> {
        let mut words = Vec::new();
        self.collect_words(true, &mut words);
        words
    }

    /// Walks the tree collecting words with the given polarity.
    fn collect_words<'a>(&'a self, positive: bool, out: &mut Vec<&'a str>) {
        match self.node() {
            QueryNode::Word(word) => {
                if positive && !out.contains(&word.as_str()) {
                    out.push(word);
                }
            }
            QueryNode::Not(inner) => inner.collect_words(!positive, out),
            QueryNode::And(left, right) | QueryNode::Or(left, right) => {
                left.collect_words(positive, out);
                right.collect_words(positive, out);
            }
        }
    }

    /// Formats the expression as an indented tree, one node per line.
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        self.fmt_tree(&mut out, 0);
        out
    }

    /// Writes this node and its children at the given indentation level.
    fn fmt_tree(&self, out: &mut String, indent: usize) {
        let prefix = "  ".repeat(indent);
        match self.node() {
            QueryNode::Word(word) => {
                out.push_str(&format!("{prefix}Word({word:?})\n"));
            }
            QueryNode::Not(inner) => {
                out.push_str(&format!("{prefix}Not\n"));
                inner.fmt_tree(out, indent + 1);
            }
            QueryNode::And(left, right) => {
                out.push_str(&format!("{prefix}And\n"));
                left.fmt_tree(out, indent + 1);
                right.fmt_tree(out, indent + 1);
            }
            QueryNode::Or(left, right) => {
                out.push_str(&format!("{prefix}Or\n"));
                left.fmt_tree(out, indent + 1);
                right.fmt_tree(out, indent + 1);
            }
        }
    }
}

impl From<&str> for Query {
    fn from(word: &str) -> Self {
        Self::word(word)
    }
}

impl From<String> for Query {
    fn from(word: String) -> Self {
        Self::word(word)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            QueryNode::Word(word) => f.write_str(&quote_word(word)),
            QueryNode::Not(inner) => write!(f, "~({inner})"),
            QueryNode::And(left, right) => write!(f, "({left} & {right})"),
            QueryNode::Or(left, right) => write!(f, "({left} | {right})"),
        }
    }
}

impl Not for Query {
    type Output = Self;

    fn not(self) -> Self {
        self.negate()
    }
}

impl Not for &Query {
    type Output = Query;

    fn not(self) -> Query {
        self.negate()
    }
}

impl BitAnd for Query {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self::and(&self, &rhs)
    }
}

impl BitAnd for &Query {
    type Output = Query;

    fn bitand(self, rhs: Self) -> Query {
        self.and(rhs)
    }
}

impl BitOr for Query {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::or(&self, &rhs)
    }
}

impl BitOr for &Query {
    type Output = Query;

    fn bitor(self, rhs: Self) -> Query {
        self.or(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Query {
        Query::word(s)
    }

    #[test]
    fn word_renders_literally() {
        assert_eq!(w("fox").render(), "fox");
    }

    #[test]
    fn nested_rendering() {
        let q = w("a") & (w("b") | w("c"));
        assert_eq!(q.render(), "(a & (b | c))");
    }

    #[test]
    fn negation_rendering() {
        assert_eq!((!w("gamma")).render(), "~(gamma)");
        assert_eq!((!!w("gamma")).render(), "~(~(gamma))");
        assert_eq!((!(w("a") | w("b"))).render(), "~((a | b))");
    }

    #[test]
    fn operators_leave_operands_untouched() {
        let a = w("a");
        let b = w("b");
        let both = &a & &b;
        let either = &a | &b;

        assert_eq!(a.render(), "a");
        assert_eq!(b.render(), "b");
        assert_eq!(both.render(), "(a & b)");
        assert_eq!(either.render(), "(a | b)");
    }

    #[test]
    fn subexpressions_are_shared() {
        let shared = w("x") | w("y");
        let left = &shared & &w("z");
        let right = !&shared;

        let QueryNode::And(l, _) = left.node() else {
            panic!("expected And");
        };
        let QueryNode::Not(inner) = right.node() else {
            panic!("expected Not");
        };
        assert!(l.ptr_eq(&shared));
        assert!(inner.ptr_eq(&shared));
    }

    #[test]
    fn from_str_builds_word() {
        let q: Query = "hello".into();
        assert!(matches!(q.node(), QueryNode::Word(s) if s == "hello"));
    }

    #[test]
    fn positive_words_skip_negated() {
        let q = (w("a") & !w("b")) | !!w("c") | w("a");
        assert_eq!(q.positive_words(), vec!["a", "c"]);
    }

    #[test]
    fn tree_string_indents_children() {
        let q = w("a") & !w("b");
        assert_eq!(
            q.to_tree_string(),
            "And\n  Word(\"a\")\n  Not\n    Word(\"b\")\n"
        );
    }

    #[test]
    fn operator_words_render_quoted() {
        assert_eq!(quote_word("plain"), "plain");
        assert_eq!(quote_word("x&y"), "\"x&y\"");
        assert_eq!(quote_word("a b|c"), "a b|c");
        assert_eq!((w("(a)") | !w("~b")).render(), "(\"(a)\" | ~(\"~b\"))");
    }
}
