use std::fmt;
use std::str::FromStr;

use gridstar_core::Pos;

use crate::distance::{euclidean, manhattan};
use crate::error::SearchError;
use crate::traits::Estimator;

/// The built-in distance estimators.
///
/// Both are admissible for 4-directional unit-cost movement, so either
/// yields shortest paths. Manhattan is exact on an open grid and usually
/// expands fewer cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated distance from `from` to `to`. Never negative.
    #[inline]
    pub fn estimate(self, from: Pos, to: Pos) -> f64 {
        match self {
            Self::Manhattan => f64::from(manhattan(from, to)),
            Self::Euclidean => euclidean(from, to),
        }
    }
}

impl Estimator for Heuristic {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> f64 {
        Heuristic::estimate(*self, from, to)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("manhattan"),
            Self::Euclidean => f.write_str("euclidean"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "l-distance" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "euclid" | "l2" => Ok(Self::Euclidean),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}
