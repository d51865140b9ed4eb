use gridstar_core::{GridError, Pos};
use thiserror::Error;

/// Convenient result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by the search engine.
///
/// Not finding a path is not an error; see
/// [`SearchState::Failed`](crate::SearchState::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Start or end is missing, outside the grid, or both are the same cell.
    #[error(
        "invalid endpoints: start {}, end {}",
        endpoint(.start),
        endpoint(.end)
    )]
    InvalidEndpoints {
        start: Option<Pos>,
        end: Option<Pos>,
    },

    /// `pop_min` was called on an empty frontier. The engine checks for
    /// emptiness first, so this indicates a bug.
    #[error("pop from an empty search frontier")]
    EmptyFrontier,

    /// A heuristic name did not match any built-in estimator.
    #[error("unknown heuristic {0:?}, expected \"manhattan\" or \"euclidean\"")]
    UnknownHeuristic(String),

    /// A grid write made while finishing a run failed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

fn endpoint(p: &Option<Pos>) -> String {
    match p {
        Some(p) => p.to_string(),
        None => "unset".to_string(),
    }
}
