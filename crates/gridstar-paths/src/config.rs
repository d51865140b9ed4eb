use crate::heuristic::Heuristic;

/// Per-run search settings, fixed before the run starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Estimator used for every `f` score of the run.
    pub heuristic: Heuristic,
    /// Notify after every expansion instead of only on path
    /// reconstruction and termination.
    pub live_trace: bool,
}

impl SearchConfig {
    /// Manhattan heuristic, no live trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heuristic (builder).
    #[inline]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the live trace flag (builder).
    #[inline]
    pub const fn with_live_trace(mut self, live_trace: bool) -> Self {
        self.live_trace = live_trace;
        self
    }
}
