//! Game-tree search for AI decisions.
//!
//! ## Key Types
//!
//! - `SearchEngine`: alpha-beta search with iterative deepening
//! - `SearchConfig`: depth, breadth and node budget, derived from a level
//! - `Evaluator` / `BoardEvaluator`: static scoring of states
//! - `SearchTree` / `SearchNode`: arena of explored positions
//! - `CancelToken`: cooperative stop flag
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tcg_ai::core::PlayerId;
//! use tcg_ai::games::standard::MatchBuilder;
//! use tcg_ai::search::{BoardEvaluator, SearchConfig, SearchEngine};
//!
//! let (rules, mut state) = MatchBuilder::new().side_deck_size(0).build(42);
//! for p in PlayerId::all() {
//!     rules.mulligan(&mut state, p, &[]);
//! }
//!
//! let mut engine = SearchEngine::new(Arc::new(rules), BoardEvaluator::default(), SearchConfig::from_level(2));
//! let action = engine.search(&state, PlayerId::new(0)).unwrap();
//! assert!(action.is_some());
//! ```

mod cancel;
pub mod config;
pub mod engine;
pub mod evaluator;
pub mod node;
pub mod stats;
pub mod tree;

pub use cancel::CancelToken;
pub use config::{SearchConfig, MAX_LEVEL, MIN_LEVEL};
pub use engine::SearchEngine;
pub use evaluator::{BoardEvaluator, EvalWeights, Evaluator, WIN_SCORE};
pub use node::{NodeId, SearchNode};
pub use stats::SearchStats;
pub use tree::SearchTree;
