//! Rules traits for game implementations.
//!
//! Games implement `ActionCatalog` and `RulesEngine` to define:
//! - Legal actions for each match state
//! - How actions modify state
//! - Win/loss conditions
//!
//! The search and the driver call into these traits but never interpret
//! game-specific rules directly.

pub mod engine;

pub use engine::{ActionCatalog, GameResult, RulesEngine};
