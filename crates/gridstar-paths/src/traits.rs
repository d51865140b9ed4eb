use std::ops::ControlFlow;

use gridstar_core::{GridGraph, Pos};

/// A distance estimator used to rank frontier cells.
///
/// Implementations must be admissible (never overestimate the number of
/// unit steps between the two cells) for the search to return shortest
/// paths.
pub trait Estimator {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Pos, to: Pos) -> f64;
}

/// Receives a notification whenever a search changes the grid in a way
/// worth re-rendering.
///
/// Returning [`ControlFlow::Break`] cancels the run.
pub trait StepHook {
    fn on_step(&mut self, grid: &GridGraph) -> ControlFlow<()>;
}

impl<F> StepHook for F
where
    F: FnMut(&GridGraph) -> ControlFlow<()>,
{
    #[inline]
    fn on_step(&mut self, grid: &GridGraph) -> ControlFlow<()> {
        self(grid)
    }
}

/// A hook that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopHook;

impl StepHook for NoopHook {
    #[inline]
    fn on_step(&mut self, _grid: &GridGraph) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}
