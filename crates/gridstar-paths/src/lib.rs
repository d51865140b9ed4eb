//! A* shortest-path search over [`GridGraph`](gridstar_core::GridGraph)s.
//!
//! The search is observable and incremental: an [`AStar`] run writes cell
//! states into the grid as it goes and reports to a [`StepHook`] after
//! state-changing steps. The hook may cancel the run. Runs can be driven
//! one iteration at a time with [`AStar::step`] or to completion with
//! [`AStar::run`] / [`search`].
//!
//! - **Heuristics**: [`Heuristic::Manhattan`] and [`Heuristic::Euclidean`],
//!   or any [`Estimator`].
//! - **Frontier**: a min-heap on `(f_score, insertion order)`, so runs are
//!   fully deterministic.
//! - **BFS**: [`bfs_distance`] gives the true unweighted distance over the
//!   same neighbour relation.
//!
//! ```
//! use gridstar_core::{GridGraph, Pos};
//! use gridstar_paths::{NoopHook, SearchConfig, search_grid};
//!
//! let mut grid = GridGraph::new(5);
//! grid.set_start(Pos::new(0, 0)).unwrap();
//! grid.set_end(Pos::new(4, 4)).unwrap();
//! let outcome = search_grid(&mut grid, SearchConfig::default(), NoopHook).unwrap();
//! assert_eq!(outcome.path_len(), 8);
//! ```

mod astar;
mod bfs;
mod config;
mod distance;
mod error;
mod frontier;
mod heuristic;
mod reconstruct;
mod scores;
mod traits;

pub use astar::{AStar, SearchOutcome, SearchState, SearchStats, search, search_grid};
pub use bfs::{UNREACHABLE, bfs_distance, bfs_map};
pub use config::SearchConfig;
pub use distance::{euclidean, manhattan};
pub use error::{Result, SearchError};
pub use frontier::Frontier;
pub use heuristic::Heuristic;
pub use reconstruct::{Predecessors, reconstruct};
pub use scores::ScoreTable;
pub use traits::{Estimator, NoopHook, StepHook};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = SearchConfig::new()
            .with_heuristic(Heuristic::Euclidean)
            .with_live_trace(true);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"heuristic":"euclidean","live_trace":true}"#);
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn config_fields_default() {
        let c: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SearchConfig::default());
    }

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expansions: 12,
            pushes: 20,
            notifications: 3,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
        let state: SearchState = serde_json::from_str(r#""succeeded""#).unwrap();
        assert_eq!(state, SearchState::Succeeded);
    }
}
