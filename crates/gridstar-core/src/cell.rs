//! The [`CellState`] tag carried by every grid cell.

use std::fmt;

/// Algorithmic state of a single cell.
///
/// States are mutually exclusive. Rendering is left to the caller, which
/// keys its own style lookup off this tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    /// Discovered and waiting in the frontier.
    Open,
    /// Expanded.
    Closed,
    /// On the reconstructed path.
    Path,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 7] = [
        Self::Empty,
        Self::Start,
        Self::End,
        Self::Barrier,
        Self::Open,
        Self::Closed,
        Self::Path,
    ];

    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    /// Start or End.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// States written by a search run: Open, Closed and Path.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }

    /// Single-character form used by text maps.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Empty),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            '#' => Some(Self::Barrier),
            'o' => Some(Self::Open),
            'x' => Some(Self::Closed),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Start => "start",
            Self::End => "end",
            Self::Barrier => "barrier",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}
