//! Observable, step-wise A* search.
//!
//! An [`AStar`] borrows the grid mutably for the whole run, writes Open,
//! Closed and Path states into it as the search progresses, and calls a
//! [`StepHook`] after state-changing steps. Scores, predecessors and the
//! frontier belong to the run and are dropped with it.

use std::iter;
use std::ops::ControlFlow;

use gridstar_core::{CellState, GridGraph, Pos};
use log::{debug, trace, warn};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::reconstruct::{Predecessors, reconstruct};
use crate::scores::ScoreTable;
use crate::traits::{Estimator, StepHook};

/// Lifecycle of a single run: `Ready → Running → {Succeeded, Failed}`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchState {
    Ready,
    Running,
    Succeeded,
    /// The frontier ran dry, or the hook cancelled the run.
    Failed,
}

impl SearchState {
    /// Succeeded or Failed.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Counters collected during a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier.
    pub expansions: usize,
    /// Frontier insertions, including the start.
    pub pushes: u64,
    /// Hook invocations.
    pub notifications: usize,
}

/// Result of a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    pub state: SearchState,
    /// Start to end inclusive; empty unless the run succeeded.
    pub path: Vec<Pos>,
    /// Cells in the order they were expanded.
    pub expanded: Vec<Pos>,
    pub stats: SearchStats,
    /// Whether the hook stopped the run early.
    pub cancelled: bool,
}

impl SearchOutcome {
    #[inline]
    pub fn found(&self) -> bool {
        self.state == SearchState::Succeeded
    }

    /// Number of steps (edges) on the path. Zero when no path was found.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A single A* run over a [`GridGraph`].
pub struct AStar<'g, E: Estimator = Heuristic> {
    grid: &'g mut GridGraph,
    estimator: E,
    live_trace: bool,
    start: usize,
    end: usize,
    end_pos: Pos,
    scores: ScoreTable,
    preds: Predecessors,
    frontier: Frontier,
    state: SearchState,
    path: Vec<Pos>,
    expanded: Vec<Pos>,
    notifications: usize,
    cancelled: bool,
    nbuf: Vec<Pos>,
}

impl<'g> AStar<'g, Heuristic> {
    /// Prepare a run from `start` to `end` using the configured heuristic.
    ///
    /// Fails with [`SearchError::InvalidEndpoints`] if either endpoint is
    /// missing, outside the grid or a barrier, or if both are the same cell.
    pub fn new(
        grid: &'g mut GridGraph,
        start: Option<Pos>,
        end: Option<Pos>,
        config: SearchConfig,
    ) -> Result<Self> {
        Self::with_estimator(grid, start, end, config.heuristic, config.live_trace)
    }
}

impl<'g, E: Estimator> AStar<'g, E> {
    /// Like [`AStar::new`], with a custom estimator.
    pub fn with_estimator(
        grid: &'g mut GridGraph,
        start: Option<Pos>,
        end: Option<Pos>,
        estimator: E,
        live_trace: bool,
    ) -> Result<Self> {
        let walkable = |p: Pos| grid.state(p).is_some_and(|st| !st.is_barrier());
        let endpoints = match (start, end) {
            (Some(s), Some(e)) if s != e && walkable(s) && walkable(e) => {
                grid.index(s).zip(grid.index(e))
            }
            _ => None,
        };
        let (Some((si, ei)), Some(start_pos), Some(end_pos)) = (endpoints, start, end) else {
            return Err(SearchError::InvalidEndpoints { start, end });
        };

        let cells = grid.len();
        let mut scores = ScoreTable::new(cells);
        let mut frontier = Frontier::new(cells);
        let h = estimator.estimate(start_pos, end_pos);
        scores.set(si, 0.0, h);
        frontier.push(h, si);

        Ok(Self {
            grid,
            estimator,
            live_trace,
            start: si,
            end: ei,
            end_pos,
            scores,
            preds: Predecessors::new(cells),
            frontier,
            state: SearchState::Ready,
            path: Vec::new(),
            expanded: Vec::new(),
            notifications: 0,
            cancelled: false,
            nbuf: Vec::with_capacity(4),
        })
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The grid as the run currently sees it.
    #[inline]
    pub fn grid(&self) -> &GridGraph {
        &*self.grid
    }

    /// The path found so far; empty until the run succeeds.
    #[inline]
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Cells expanded so far, in order.
    #[inline]
    pub fn expanded(&self) -> &[Pos] {
        &self.expanded
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expansions: self.expanded.len(),
            pushes: self.frontier.pushed(),
            notifications: self.notifications,
        }
    }

    /// Run until the search succeeds, fails or is cancelled.
    pub fn run<H: StepHook + ?Sized>(&mut self, hook: &mut H) -> Result<SearchState> {
        loop {
            let state = self.step(hook)?;
            if state.is_terminal() {
                return Ok(state);
            }
        }
    }

    /// Perform one outer iteration: pop the best cell, then either finish
    /// or relax its neighbours. Terminal runs are left untouched.
    pub fn step<H: StepHook + ?Sized>(&mut self, hook: &mut H) -> Result<SearchState> {
        match self.state {
            SearchState::Succeeded | SearchState::Failed => return Ok(self.state),
            SearchState::Ready => {
                self.state = SearchState::Running;
                debug!(
                    "a* {} -> {} on {}x{} grid",
                    self.grid.pos(self.start),
                    self.end_pos,
                    self.grid.size(),
                    self.grid.size()
                );
                // The start entered the frontier during construction.
                if self.live_trace && self.notify(hook).is_break() {
                    return Ok(self.cancel());
                }
            }
            SearchState::Running => {}
        }

        if self.frontier.is_empty() {
            return Ok(self.fail(hook));
        }

        let current = self.frontier.pop_min()?;
        let cp = self.grid.pos(current);
        self.expanded.push(cp);
        trace!(
            "expand {cp} g={} f={}",
            self.scores.g(current),
            self.scores.f(current)
        );

        if current == self.end {
            return self.succeed(hook);
        }

        self.relax(current, cp);

        if self.live_trace && self.notify(hook).is_break() {
            return Ok(self.cancel());
        }
        if current != self.start {
            self.paint(current, CellState::Closed);
        }
        Ok(self.state)
    }

    /// Consume the run, returning what it produced.
    pub fn into_outcome(self) -> SearchOutcome {
        let stats = self.stats();
        SearchOutcome {
            state: self.state,
            path: self.path,
            expanded: self.expanded,
            stats,
            cancelled: self.cancelled,
        }
    }

    fn relax(&mut self, current: usize, cp: Pos) {
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors_into(cp, &mut nbuf);

        let tentative = self.scores.g(current) + 1.0;
        for &np in nbuf.iter() {
            let Some(ni) = self.grid.index(np) else {
                continue;
            };
            if tentative >= self.scores.g(ni) {
                continue;
            }
            let f = tentative + self.estimator.estimate(np, self.end_pos);
            self.preds.set(ni, current);
            self.scores.set(ni, tentative, f);

            // A pending cell keeps its heap entry and sequence number.
            if self.frontier.contains(ni) {
                continue;
            }
            self.frontier.push(f, ni);
            self.paint(ni, CellState::Open);
        }

        self.nbuf = nbuf;
    }

    fn succeed<H: StepHook + ?Sized>(&mut self, hook: &mut H) -> Result<SearchState> {
        let chain = reconstruct(&self.preds, self.end);
        for &cell in &chain[1..] {
            self.paint(cell, CellState::Path);
            if self.notify(hook).is_break() {
                return Ok(self.cancel());
            }
        }

        let start_pos = self.grid.pos(self.start);
        self.grid.reset_cell(start_pos)?;
        self.grid.reset_cell(self.end_pos)?;
        self.grid.set_start(start_pos)?;
        self.grid.set_end(self.end_pos)?;

        self.path = iter::once(start_pos)
            .chain(chain.iter().rev().map(|&c| self.grid.pos(c)))
            .collect();
        self.state = SearchState::Succeeded;
        debug!(
            "a* found {} step path after {} expansions",
            self.path.len() - 1,
            self.expanded.len()
        );
        let _ = self.notify(hook);
        Ok(self.state)
    }

    fn fail<H: StepHook + ?Sized>(&mut self, hook: &mut H) -> SearchState {
        self.state = SearchState::Failed;
        debug!(
            "a* found no path to {} after {} expansions",
            self.end_pos,
            self.expanded.len()
        );
        let _ = self.notify(hook);
        self.state
    }

    fn cancel(&mut self) -> SearchState {
        warn!(
            "a* cancelled by hook after {} expansions",
            self.expanded.len()
        );
        self.state = SearchState::Failed;
        self.cancelled = true;
        self.path.clear();
        self.state
    }

    /// Write a search mark. Endpoint cells, the run's own or the grid's,
    /// are left untouched.
    fn paint(&mut self, cell: usize, state: CellState) {
        if cell == self.start || cell == self.end || self.grid.state_at(cell).is_endpoint() {
            return;
        }
        let p = self.grid.pos(cell);
        // In bounds by construction, so this cannot fail.
        let _ = self.grid.set_state(p, state);
    }

    fn notify<H: StepHook + ?Sized>(&mut self, hook: &mut H) -> ControlFlow<()> {
        self.notifications += 1;
        hook.on_step(&*self.grid)
    }
}

/// Run a complete search from `start` to `end`.
///
/// `on_step` is called after state-changing steps (every iteration when
/// `config.live_trace` is set, otherwise only while the path is drawn and
/// once on termination) and may cancel the run.
pub fn search<H: StepHook>(
    grid: &mut GridGraph,
    start: Option<Pos>,
    end: Option<Pos>,
    config: SearchConfig,
    mut on_step: H,
) -> Result<SearchOutcome> {
    let mut astar = AStar::new(grid, start, end, config)?;
    astar.run(&mut on_step)?;
    Ok(astar.into_outcome())
}

/// [`search`] between the grid's own start and end cells.
pub fn search_grid<H: StepHook>(
    grid: &mut GridGraph,
    config: SearchConfig,
    on_step: H,
) -> Result<SearchOutcome> {
    let (start, end) = (grid.start(), grid.end());
    search(grid, start, end, config, on_step)
}
