//! The A* open set.
//!
//! Entries live in a min-heap keyed by `(f_score, seq)`. `seq` increases
//! with every insertion, so equal scores pop in insertion order (FIFO).
//!
//! Cells are identified by their flat grid index. A cell is pushed at most
//! once while pending, so its entry keeps the score and sequence number it
//! was pushed with even if the search later finds it a cheaper route.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{Result, SearchError};

#[derive(Debug, Clone, Copy)]
struct Entry {
    f: f64,
    seq: u64,
    cell: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority queue of cells awaiting expansion.
#[derive(Debug, Clone)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    pending: Vec<bool>,
    seq: u64,
}

impl Frontier {
    /// Create an empty frontier for a grid of `cells` cells.
    pub fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: vec![false; cells],
            seq: 0,
        }
    }

    /// Insert `cell` with priority `f` and mark it pending.
    ///
    /// `cell` must not already be pending.
    pub fn push(&mut self, f: f64, cell: usize) {
        debug_assert!(!self.pending[cell], "cell {cell} pushed twice");
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { f, seq, cell }));
        self.pending[cell] = true;
    }

    /// Remove and return the pending cell with the smallest `(f, seq)`.
    pub fn pop_min(&mut self) -> Result<usize> {
        let Reverse(entry) = self.heap.pop().ok_or(SearchError::EmptyFrontier)?;
        self.pending[entry.cell] = false;
        Ok(entry.cell)
    }

    /// Whether `cell` is waiting in the frontier.
    #[inline]
    pub fn contains(&self, cell: usize) -> bool {
        self.pending.get(cell).copied().unwrap_or(false)
    }

    /// Whether no cell is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pending cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes so far.
    #[inline]
    pub fn pushed(&self) -> u64 {
        self.seq
    }
}
