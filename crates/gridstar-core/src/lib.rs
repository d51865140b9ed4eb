//! **gridstar-core**: the grid that gridstar searches.
//!
//! This crate holds the data a search runs over: `(row, col)` geometry, the
//! per-cell [`CellState`] tag, and the [`GridGraph`] that owns those states
//! and answers 4-directional, barrier-aware adjacency queries. Front ends
//! map [`CellState`] to their own styles.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;

pub use cell::CellState;
pub use error::{GridError, Result};
pub use geom::{Pos, Range, RangeIter};
pub use grid::GridGraph;
pub use parse::parse_grid;
