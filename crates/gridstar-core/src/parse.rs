//! Text maps.
//!
//! A map is a square block of characters, one grid row per line:
//! `.` empty, `#` barrier, `S` start, `E` end. Search marks (`o`, `x`,
//! `*`) are accepted too, so a rendered grid parses back. Surrounding
//! whitespace on each line and blank lines are ignored.

use std::str::FromStr;

use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::geom::Pos;
use crate::grid::GridGraph;

/// Parse a text map into a grid.
pub fn parse_grid(text: &str) -> Result<GridGraph> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(GridError::Empty);
    }

    let n = lines.len();
    let mut grid = GridGraph::new(n as i32);
    for (row, line) in lines.iter().enumerate() {
        let width = line.chars().count();
        if width != n {
            return Err(GridError::NotSquare {
                line: row + 1,
                width,
                expected: n,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let pos = Pos::new(row as i32, col as i32);
            let state = CellState::from_glyph(ch).ok_or(GridError::InvalidChar { ch, pos })?;
            let taken = match state {
                CellState::Start => grid.start().is_some(),
                CellState::End => grid.end().is_some(),
                _ => false,
            };
            if taken {
                return Err(GridError::DuplicateEndpoint { state, pos });
            }
            grid.set_state(pos, state)?;
        }
    }
    Ok(grid)
}

impl FromStr for GridGraph {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        parse_grid(s)
    }
}
