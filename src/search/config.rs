//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Lowest and highest AI level.
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// AI level (1-10) the limits were derived from.
    pub level: u8,

    /// Maximum search depth in plies (one ply = one action).
    pub max_depth: u16,

    /// Children kept per node after ranking by static evaluation.
    pub max_breadth: usize,

    /// Nodes visited across all deepening iterations before the search
    /// stops. The first iteration always completes.
    pub node_budget: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_level(5)
    }
}

impl SearchConfig {
    /// Derive limits from an AI level, clamped to 1..=10.
    ///
    /// ```
    /// use tcg_ai::search::SearchConfig;
    ///
    /// let weak = SearchConfig::from_level(1);
    /// let strong = SearchConfig::from_level(10);
    /// assert!(weak.max_depth < strong.max_depth);
    /// assert_eq!(SearchConfig::from_level(42), strong);
    /// ```
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        Self {
            level,
            max_depth: 2 + u16::from(level) / 2,
            max_breadth: 4 + 2 * usize::from(level),
            node_budget: 2_000 * u64::from(level),
        }
    }

    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u16) -> Self {
        self.max_depth = depth.max(1);
        self
    }

    /// Create a new config with custom breadth.
    pub fn with_breadth(mut self, breadth: usize) -> Self {
        self.max_breadth = breadth.max(1);
        self
    }

    /// Create a new config with custom node budget.
    pub fn with_node_budget(mut self, budget: u64) -> Self {
        self.node_budget = budget;
        self
    }
}
