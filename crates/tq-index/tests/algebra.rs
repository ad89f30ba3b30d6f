//! Set-algebra properties of query evaluation.
//!
//! Each property is checked over every combination of a small pool of
//! expressions against both fixtures.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::collections::BTreeSet;

use tq_index::{Evaluate, Query, TextIndex, parse, render};

/// The two hand-built fixtures.
fn fixtures() -> Vec<TextIndex> {
    vec![
        TextIndex::from_lines(["fox jumps", "the fox runs", "jumps high"]),
        TextIndex::from_lines(["alpha beta", "beta gamma", "alpha gamma"]),
    ]
}

/// Expressions covering words, misses, and nested composites.
fn pool() -> Vec<Query> {
    let w = Query::word;
    vec![
        w("fox"),
        w("jumps"),
        w("alpha"),
        w("gamma"),
        w("missing"),
        !w("beta"),
        w("fox") | w("high"),
        w("alpha") & !w("gamma"),
    ]
}

/// Evaluates and collects the matching lines as a set.
fn lines_of(query: &Query, index: &TextIndex) -> BTreeSet<usize> {
    query.eval(index).lines().iter().collect()
}

#[test]
fn word_matches_whitespace_tokens() {
    let index = &fixtures()[0];

    let fox = Query::word("fox").eval(index);
    assert_eq!(fox.lines().as_slice(), &[0, 1]);
    assert_eq!(fox.len(), 2);

    let jumps = Query::word("jumps").eval(index);
    assert_eq!(jumps.lines().as_slice(), &[0, 2]);
}

#[test]
fn not_partitions_the_line_range() {
    for index in fixtures() {
        let all: BTreeSet<usize> = (0..index.line_count()).collect();
        for q in pool() {
            let pos = lines_of(&q, &index);
            let neg = lines_of(&!&q, &index);
            assert!(pos.is_disjoint(&neg), "{q} overlaps its negation");
            let covered: BTreeSet<usize> = pos.union(&neg).copied().collect();
            assert_eq!(covered, all, "{q} and its negation miss lines");
        }
    }
}

#[test]
fn and_is_intersection_or_is_union() {
    for index in fixtures() {
        for a in pool() {
            for b in pool() {
                let la = lines_of(&a, &index);
                let lb = lines_of(&b, &index);

                let and: BTreeSet<usize> = la.intersection(&lb).copied().collect();
                let or: BTreeSet<usize> = la.union(&lb).copied().collect();

                assert_eq!(lines_of(&(&a & &b), &index), and, "{a} & {b}");
                assert_eq!(lines_of(&(&a | &b), &index), or, "{a} | {b}");
            }
        }
    }
}

#[test]
fn and_or_commute_and_associate() {
    let pool = pool();
    for index in fixtures() {
        for a in &pool {
            for b in &pool {
                assert_eq!(lines_of(&(a & b), &index), lines_of(&(b & a), &index));
                assert_eq!(lines_of(&(a | b), &index), lines_of(&(b | a), &index));

                for c in &pool {
                    assert_eq!(
                        lines_of(&(&(a & b) & c), &index),
                        lines_of(&(a & &(b & c)), &index)
                    );
                    assert_eq!(
                        lines_of(&(&(a | b) | c), &index),
                        lines_of(&(a | &(b | c)), &index)
                    );
                }
            }
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    for index in fixtures() {
        for q in pool() {
            let first = q.eval(&index);
            let second = q.eval(&index);
            assert_eq!(first.sought(), second.sought());
            assert_eq!(first.lines(), second.lines());
            assert!(first.shares_store(&second));
        }
    }
}

#[test]
fn absent_word_reports_zero_times() {
    let index = &fixtures()[0];
    let result = Query::word("zebra").eval(index);
    assert!(result.is_empty());
    assert_eq!(render(&result), "zebra occurs 0 times\n");
}

#[test]
fn rendering_is_structural() {
    let q = Query::word("a") & (Query::word("b") | Query::word("c"));
    assert_eq!(q.to_string(), "(a & (b | c))");
}

#[test]
fn alpha_beta_gamma_scenario() {
    let index = &fixtures()[1];
    let w = Query::word;

    assert_eq!((w("alpha") & w("gamma")).eval(index).lines().as_slice(), &[2]);
    assert_eq!(
        (w("alpha") | w("beta")).eval(index).lines().as_slice(),
        &[0, 1, 2]
    );
    assert_eq!((!w("gamma")).eval(index).lines().as_slice(), &[0]);
}

#[test]
fn parsed_and_built_queries_agree() {
    for index in fixtures() {
        let parsed = parse("(fox | alpha) & ~(jumps | gamma)").unwrap().unwrap();
        let built = (Query::word("fox") | Query::word("alpha"))
            & !(Query::word("jumps") | Query::word("gamma"));

        let a = parsed.eval(&index);
        let b = built.eval(&index);
        assert_eq!(a.sought(), b.sought());
        assert_eq!(a.lines(), b.lines());
    }
}

#[test]
fn shared_subexpressions_evaluate_independently() {
    let index = &fixtures()[1];
    let shared = Query::word("beta");
    let left = &shared & &Query::word("alpha");
    let right = &shared & &Query::word("gamma");

    assert_eq!(left.eval(index).lines().as_slice(), &[0]);
    assert_eq!(right.eval(index).lines().as_slice(), &[1]);
    assert_eq!(shared.eval(index).lines().as_slice(), &[0, 1]);
}
