//! Terminal front end for gridstar.
//!
//! Owns everything the engine does not: the colour palette keyed off
//! [`CellState`], drawing a grid to a terminal, and building grids from
//! command-line input.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use gridstar_core::{CellState, GridGraph, Pos};
use rand::Rng;

/// Colour of each cell state.
pub fn cell_color(state: CellState) -> Color {
    let (r, g, b) = match state {
        CellState::Empty => (255, 255, 255),
        CellState::Start => (255, 165, 0),
        CellState::End => (64, 224, 208),
        CellState::Barrier => (0, 0, 0),
        CellState::Open => (0, 255, 0),
        CellState::Closed => (255, 0, 0),
        CellState::Path => (128, 0, 128),
    };
    Color::Rgb { r, g, b }
}

/// Draw `grid` at the top-left of the terminal, two columns per cell.
///
/// With `color` unset the text map form is printed instead.
pub fn render(out: &mut impl Write, grid: &GridGraph, color: bool) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, 0))?;
    if !color {
        for (p, state) in grid.iter() {
            queue!(out, Print(state.glyph()))?;
            if p.col == grid.size() - 1 {
                queue!(out, Print("\r\n"))?;
            }
        }
        return out.flush();
    }
    for (p, state) in grid.iter() {
        queue!(
            out,
            SetBackgroundColor(cell_color(state)),
            SetForegroundColor(Color::Grey),
            Print("  ")
        )?;
        if p.col == grid.size() - 1 {
            queue!(out, ResetColor, Print("\r\n"))?;
        }
    }
    queue!(out, ResetColor)?;
    out.flush()
}

/// Turn each non-endpoint cell into a barrier with probability `density`.
pub fn scatter_barriers(grid: &mut GridGraph, density: f64, rng: &mut impl Rng) -> usize {
    let density = density.clamp(0.0, 1.0);
    let mut placed = 0;
    let cells: Vec<Pos> = grid.range().iter().collect();
    for p in cells {
        if grid.state(p).is_some_and(CellState::is_endpoint) {
            continue;
        }
        if rng.random_bool(density) && grid.set_barrier(p).is_ok() {
            placed += 1;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn palette_is_distinct() {
        let colors: Vec<_> = CellState::ALL.iter().map(|&s| cell_color(s)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn plain_render_is_text_map() {
        let grid: GridGraph = "S.\n#E".parse().unwrap();
        let mut out = Vec::new();
        render(&mut out, &grid, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("S.\r\n#E\r\n"));
    }

    #[test]
    fn scatter_keeps_endpoints() {
        let mut grid = GridGraph::new(6);
        grid.set_start(Pos::new(0, 0)).unwrap();
        grid.set_end(Pos::new(5, 5)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let placed = scatter_barriers(&mut grid, 1.0, &mut rng);
        assert_eq!(placed, 34);
        assert_eq!(grid.start(), Some(Pos::new(0, 0)));
        assert_eq!(grid.end(), Some(Pos::new(5, 5)));
    }

    #[test]
    fn scatter_is_seeded() {
        let mut a = GridGraph::new(10);
        let mut b = GridGraph::new(10);
        scatter_barriers(&mut a, 0.3, &mut StdRng::seed_from_u64(5));
        scatter_barriers(&mut b, 0.3, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
