//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited across all iterations.
    pub nodes_visited: u64,

    /// Deepest fully completed iteration.
    pub depth_completed: u16,

    /// Alpha-beta cutoffs.
    pub cutoffs: u64,

    /// Score of the chosen action at `depth_completed`.
    pub best_score: f64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 500;
        stats.cutoffs = 12;
        stats.time_us = 250_000;

        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }
}
