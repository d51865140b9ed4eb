//! Geometry primitives: [`Pos`] and [`Range`].
//!
//! Positions are `(row, col)` pairs. Rows grow downwards, columns grow to
//! the right, and ordering is row-major.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::GridError;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in search order: down, up, left, right.
    ///
    /// No bounds check is applied.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Pos {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Pos {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Parses `"row,col"`, with optional surrounding parentheses and spaces.
impl FromStr for Pos {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidPos(s.to_string());
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Pos,
    pub max: Pos,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Pos::new(row0.min(row1), col0.min(col1)),
            max: Pos::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The `n×n` square anchored at the origin.
    #[inline]
    pub fn square(n: i32) -> Self {
        Self::new(0, 0, n.max(0), n.max(0))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Pos) -> bool {
        p.row >= self.min.row
            && p.row < self.max.row
            && p.col >= self.min.col
            && p.col < self.max.col
    }

    /// Row-major index of `p`, or `None` when `p` is outside the range.
    #[inline]
    pub fn index(self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let row = (p.row - self.min.row) as usize;
        let col = (p.col - self.min.col) as usize;
        Some(row * self.cols() as usize + col)
    }

    /// Position for a row-major index. The index must be below [`len`](Self::len).
    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        let cols = self.cols().max(1) as usize;
        Pos::new(
            (idx / cols) as i32 + self.min.row,
            (idx % cols) as i32 + self.min.col,
        )
    }

    /// Row-major iterator over every position in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Pos;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the positions in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Pos,
}

impl Iterator for RangeIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let cols = self.range.cols() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 4);
        assert_eq!(a + b, Pos::new(4, 6));
        assert_eq!(b - a, Pos::new(2, 2));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn neighbors_4_order() {
        let n = Pos::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [Pos::new(3, 2), Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 3)]
        );
    }

    #[test]
    fn pos_ordering_is_row_major() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 5), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 5), Pos::new(1, 0)]);
    }

    #[test]
    fn pos_parse() {
        assert_eq!("3,4".parse::<Pos>().unwrap(), Pos::new(3, 4));
        assert_eq!(" (0, 12) ".parse::<Pos>().unwrap(), Pos::new(0, 12));
        assert!("3".parse::<Pos>().is_err());
        assert!("a,b".parse::<Pos>().is_err());
    }

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 2, 3);
        assert_eq!(r.rows(), 2);
        assert_eq!(r.cols(), 3);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Pos::new(1, 2)));
        assert!(!r.contains(Pos::new(2, 0)));
        assert!(!r.contains(Pos::new(0, 3)));
        assert!(!r.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Pos::new(0, 0));
        assert_eq!(r.max, Pos::new(3, 2));
    }

    #[test]
    fn index_and_pos_agree() {
        let r = Range::square(4);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
            assert_eq!(r.pos(i), p);
        }
        assert_eq!(r.index(Pos::new(4, 0)), None);
    }

    #[test]
    fn range_iter_count() {
        let r = Range::new(0, 0, 2, 3);
        let it = r.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = it.collect();
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::square(0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}
