//! Ordered sets of line numbers and the merge algebra over them.

use std::{cmp::Ordering, slice};

/// An ascending, duplicate-free set of 0-based line numbers.
///
/// Intersection, union, and complement are single linear merges over the
/// sorted storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    /// Line numbers in strictly ascending order.
    lines: Vec<usize>,
}

impl LineSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line number during a build pass.
    ///
    /// Builds visit lines in ascending order, so a repeat can only ever be the
    /// current last element.
    pub(crate) fn push_ascending(&mut self, line: usize) {
        match self.lines.last() {
            Some(&last) if last == line => {}
            Some(&last) => {
                debug_assert!(last < line, "lines must be pushed in ascending order");
                self.lines.push(line);
            }
            None => self.lines.push(line),
        }
    }

    /// Returns the number of lines in the set.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the set has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the largest line number, if any.
    pub fn last(&self) -> Option<usize> {
        self.lines.last().copied()
    }

    /// Returns the line numbers as an ascending slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.lines
    }

    /// Iterates line numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().copied()
    }

    /// Returns the lines present in both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let (a, b) = (&self.lines, &other.lines);
        let mut out = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }

        Self { lines: out }
    }

    /// Returns the lines present in either set.
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (&self.lines, &other.lines);
        let mut out = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);

        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Less => {
                    out.push(a[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    out.push(b[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        out.extend_from_slice(&a[i..]);
        out.extend_from_slice(&b[j..]);

        Self { lines: out }
    }

    /// Returns every line in `0..universe` that is not in this set.
    ///
    /// Walks the range once while advancing a cursor through the sorted
    /// storage, so the cost is linear in `universe`.
    pub fn complement(&self, universe: usize) -> Self {
        let mut out = Vec::with_capacity(universe.saturating_sub(self.lines.len()));
        let mut members = self.lines.iter().copied().peekable();

        for line in 0..universe {
            if members.next_if_eq(&line).is_none() {
                out.push(line);
            }
        }

        Self { lines: out }
    }
}

impl FromIterator<usize> for LineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut lines: Vec<usize> = iter.into_iter().collect();
        lines.sort_unstable();
        lines.dedup();
        Self { lines }
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[usize]) -> LineSet {
        lines.iter().copied().collect()
    }

    #[test]
    fn from_iter_sorts_and_dedups() {
        assert_eq!(set(&[3, 1, 3, 0]).as_slice(), &[0, 1, 3]);
    }

    #[test]
    fn push_ascending_skips_repeats() {
        let mut s = LineSet::new();
        s.push_ascending(0);
        s.push_ascending(0);
        s.push_ascending(2);
        assert_eq!(s.as_slice(), &[0, 2]);
    }

    #[test]
    fn intersection_merges() {
        assert_eq!(set(&[0, 2, 4, 6]).intersection(&set(&[1, 2, 3, 6])), set(&[2, 6]));
        assert!(set(&[1]).intersection(&LineSet::new()).is_empty());
    }

    #[test]
    fn union_merges_without_duplicates() {
        assert_eq!(set(&[0, 4]).union(&set(&[1, 4, 9])), set(&[0, 1, 4, 9]));
        assert_eq!(LineSet::new().union(&set(&[5])), set(&[5]));
    }

    #[test]
    fn complement_covers_gaps() {
        assert_eq!(set(&[1, 3]).complement(5), set(&[0, 2, 4]));
        assert_eq!(LineSet::new().complement(3), set(&[0, 1, 2]));
        assert!(set(&[0, 1, 2]).complement(3).is_empty());
        assert!(LineSet::new().complement(0).is_empty());
    }

    #[test]
    fn last_is_the_largest_line() {
        assert_eq!(set(&[2, 5, 8]).last(), Some(8));
        assert_eq!(LineSet::new().last(), None);
    }
}
