//! The [`GridGraph`] type: an `N×N` lattice of [`CellState`]s.
//!
//! The grid is the single owner of cell state. Adjacency is 4-directional
//! and derived from the current barrier layout on every query, so barrier
//! edits made between searches are always observed.

use std::fmt;

use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::geom::{Pos, Range};

/// A fixed-size square grid of cells with at most one start and one end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    size: i32,
    cells: Vec<CellState>,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl GridGraph {
    /// Create an `n×n` grid of empty cells. A non-positive `n` gives an
    /// empty grid.
    pub fn new(n: i32) -> Self {
        let size = n.max(0);
        Self {
            size,
            cells: vec![CellState::Empty; (size as usize) * (size as usize)],
            start: None,
            end: None,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        Range::square(self.size)
    }

    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.range().contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        self.range().index(p)
    }

    /// Position of a flat index. The index must be below [`len`](Self::len).
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        debug_assert!(idx < self.cells.len(), "index {idx} out of bounds");
        self.range().pos(idx)
    }

    fn checked_index(&self, p: Pos) -> Result<usize> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size,
        })
    }

    /// State of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// State of the cell at a flat index.
    #[inline]
    pub fn state_at(&self, idx: usize) -> CellState {
        self.cells[idx]
    }

    /// Current start cell.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// Current end cell.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    // -----------------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------------

    /// Make `p` the start cell. A previous start cell becomes empty.
    pub fn set_start(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        if self.end == Some(p) {
            return Err(GridError::Occupied {
                pos: p,
                state: CellState::End,
            });
        }
        if let Some(old) = self.start.take() {
            self.write(old, CellState::Empty);
        }
        self.cells[i] = CellState::Start;
        self.start = Some(p);
        Ok(())
    }

    /// Make `p` the end cell. A previous end cell becomes empty.
    pub fn set_end(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        if self.start == Some(p) {
            return Err(GridError::Occupied {
                pos: p,
                state: CellState::Start,
            });
        }
        if let Some(old) = self.end.take() {
            self.write(old, CellState::Empty);
        }
        self.cells[i] = CellState::End;
        self.end = Some(p);
        Ok(())
    }

    /// Turn `p` into a barrier. Endpoints must be reset first.
    pub fn set_barrier(&mut self, p: Pos) -> Result<()> {
        let i = self.checked_index(p)?;
        let state = self.cells[i];
        if state.is_endpoint() {
            return Err(GridError::Occupied { pos: p, state });
        }
        self.cells[i] = CellState::Barrier;
        Ok(())
    }

    /// Empty the cell at `p`, forgetting it as start or end.
    pub fn reset_cell(&mut self, p: Pos) -> Result<()> {
        self.checked_index(p)?;
        self.write(p, CellState::Empty);
        Ok(())
    }

    /// Write any state to `p`, keeping the start/end bookkeeping coherent.
    ///
    /// Writing `Start` or `End` behaves like [`set_start`](Self::set_start)
    /// or [`set_end`](Self::set_end). Overwriting an endpoint with another
    /// state forgets it.
    pub fn set_state(&mut self, p: Pos, state: CellState) -> Result<()> {
        match state {
            CellState::Start => self.set_start(p),
            CellState::End => self.set_end(p),
            _ => {
                self.checked_index(p)?;
                self.write(p, state);
                Ok(())
            }
        }
    }

    /// Turn every Open, Closed and Path cell back into Empty. Barriers and
    /// endpoints are kept.
    pub fn clear_search_marks(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_search_mark() {
                *c = CellState::Empty;
            }
        }
    }

    /// Empty every cell and forget both endpoints.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        self.start = None;
        self.end = None;
    }

    /// Unchecked write of a non-endpoint state; `p` must be in bounds.
    fn write(&mut self, p: Pos, state: CellState) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        if let Some(i) = self.index(p) {
            self.cells[i] = state;
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Append the passable neighbours of `p` to `buf`, in the order down,
    /// up, left, right. The caller clears `buf` first.
    ///
    /// `p` must be in bounds.
    pub fn neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        debug_assert!(self.contains(p), "neighbors of out-of-bounds {p}");
        for n in p.neighbors_4() {
            if let Some(i) = self.index(n) {
                if !self.cells[i].is_barrier() {
                    buf.push(n);
                }
            }
        }
    }

    /// The passable neighbours of `p`. See [`neighbors_into`](Self::neighbors_into).
    pub fn neighbors(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    // -----------------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------------

    /// Row-major iterator over `(Pos, CellState)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Pos, CellState)> + '_ {
        self.range().iter().zip(self.cells.iter().copied())
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

/// Renders the grid as a text map, one row per line.
impl fmt::Display for GridGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.size == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.size as usize) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = GridGraph::new(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.count(CellState::Empty), 16);
        assert_eq!(g.start(), None);
        assert_eq!(g.end(), None);
        assert_eq!(g.state(Pos::new(4, 0)), None);
    }

    #[test]
    fn negative_size_is_empty() {
        let g = GridGraph::new(-3);
        assert!(g.is_empty());
        assert_eq!(g.to_string(), "");
    }

    #[test]
    fn start_moves() {
        let mut g = GridGraph::new(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_start(Pos::new(1, 1)).unwrap();
        assert_eq!(g.start(), Some(Pos::new(1, 1)));
        assert_eq!(g.state(Pos::new(0, 0)), Some(CellState::Empty));
        assert_eq!(g.count(CellState::Start), 1);
    }

    #[test]
    fn endpoints_cannot_overlap() {
        let mut g = GridGraph::new(3);
        g.set_start(Pos::new(1, 1)).unwrap();
        let err = g.set_end(Pos::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GridError::Occupied {
                pos: Pos::new(1, 1),
                state: CellState::Start
            }
        );
        assert_eq!(g.end(), None);
    }

    #[test]
    fn barrier_refuses_endpoints() {
        let mut g = GridGraph::new(3);
        g.set_end(Pos::new(2, 2)).unwrap();
        assert!(g.set_barrier(Pos::new(2, 2)).is_err());
        g.set_barrier(Pos::new(1, 2)).unwrap();
        assert_eq!(g.state(Pos::new(1, 2)), Some(CellState::Barrier));
    }

    #[test]
    fn start_may_replace_barrier() {
        let mut g = GridGraph::new(3);
        g.set_barrier(Pos::new(0, 1)).unwrap();
        g.set_start(Pos::new(0, 1)).unwrap();
        assert_eq!(g.state(Pos::new(0, 1)), Some(CellState::Start));
    }

    #[test]
    fn out_of_bounds_mutators() {
        let mut g = GridGraph::new(2);
        let p = Pos::new(2, 0);
        let err = GridError::OutOfBounds { pos: p, size: 2 };
        assert_eq!(g.set_start(p), Err(err.clone()));
        assert_eq!(g.set_barrier(p), Err(err.clone()));
        assert_eq!(g.reset_cell(p), Err(err));
    }

    #[test]
    fn reset_forgets_endpoint() {
        let mut g = GridGraph::new(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.reset_cell(Pos::new(0, 0)).unwrap();
        assert_eq!(g.start(), None);
        assert_eq!(g.state(Pos::new(0, 0)), Some(CellState::Empty));
    }

    #[test]
    fn set_state_overwriting_end_forgets_it() {
        let mut g = GridGraph::new(3);
        g.set_end(Pos::new(2, 0)).unwrap();
        g.set_state(Pos::new(2, 0), CellState::Path).unwrap();
        assert_eq!(g.end(), None);
        g.set_state(Pos::new(0, 2), CellState::End).unwrap();
        assert_eq!(g.end(), Some(Pos::new(0, 2)));
    }

    #[test]
    fn clear_search_marks_keeps_layout() {
        let mut g = GridGraph::new(3);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_barrier(Pos::new(1, 1)).unwrap();
        g.set_state(Pos::new(0, 1), CellState::Open).unwrap();
        g.set_state(Pos::new(0, 2), CellState::Closed).unwrap();
        g.set_state(Pos::new(1, 0), CellState::Path).unwrap();
        g.clear_search_marks();
        assert_eq!(g.count(CellState::Empty), 7);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.state(Pos::new(1, 1)), Some(CellState::Barrier));

        g.clear();
        assert_eq!(g.count(CellState::Empty), 9);
        assert_eq!(g.start(), None);
    }

    #[test]
    fn neighbor_order_and_bounds() {
        let g = GridGraph::new(3);
        assert_eq!(
            g.neighbors(Pos::new(1, 1)),
            vec![Pos::new(2, 1), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 2)]
        );
        assert_eq!(
            g.neighbors(Pos::new(0, 0)),
            vec![Pos::new(1, 0), Pos::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_skip_barriers_and_follow_edits() {
        let mut g = GridGraph::new(3);
        g.set_barrier(Pos::new(0, 1)).unwrap();
        assert_eq!(g.neighbors(Pos::new(0, 0)), vec![Pos::new(1, 0)]);
        g.reset_cell(Pos::new(0, 1)).unwrap();
        assert_eq!(
            g.neighbors(Pos::new(0, 0)),
            vec![Pos::new(1, 0), Pos::new(0, 1)]
        );
    }

    #[test]
    fn neighbors_idempotent() {
        let mut g = GridGraph::new(5);
        g.set_barrier(Pos::new(2, 3)).unwrap();
        for p in g.range() {
            assert_eq!(g.neighbors(p), g.neighbors(p));
        }
    }

    #[test]
    fn display_text_map() {
        let mut g = GridGraph::new(2);
        g.set_start(Pos::new(0, 0)).unwrap();
        g.set_barrier(Pos::new(0, 1)).unwrap();
        g.set_end(Pos::new(1, 1)).unwrap();
        assert_eq!(g.to_string(), "S#\n.E\n");
    }
}
