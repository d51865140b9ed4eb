use thiserror::Error;

use crate::cell::CellState;
use crate::geom::Pos;

/// Convenient result alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised by grid mutators and text map parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The position lies outside the `size×size` grid.
    #[error("position {pos} is outside the {size}x{size} grid")]
    OutOfBounds { pos: Pos, size: i32 },

    /// The target cell holds an endpoint that the operation may not replace.
    #[error("cell {pos} is occupied by the {state} cell")]
    Occupied { pos: Pos, state: CellState },

    /// A text map row has a different width than the number of rows.
    #[error("map line {line} has width {width}, expected {expected}")]
    NotSquare {
        line: usize,
        width: usize,
        expected: usize,
    },

    /// A text map contains a character outside the map alphabet.
    #[error("invalid map character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Pos },

    /// A text map places a second start or end cell.
    #[error("duplicate {state} cell at {pos}")]
    DuplicateEndpoint { state: CellState, pos: Pos },

    /// A text map has no rows.
    #[error("map is empty")]
    Empty,

    /// A coordinate string is not of the form `row,col`.
    #[error("invalid position {0:?}, expected \"row,col\"")]
    InvalidPos(String),
}
