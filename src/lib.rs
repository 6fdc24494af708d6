//! # tcg-ai
//!
//! AI decision core for a two-player trading card game.
//!
//! ## Design Principles
//!
//! 1. **Read-Only Snapshots**: The AI reads a `MatchState` clone and acts
//!    only through the `Gameplay` trait. It never mutates the live match.
//!
//! 2. **Cancelable Background Search**: Searches run on a worker thread and
//!    stop cooperatively when the turn is lost.
//!
//! 3. **Deterministic**: Search has no randomness; the only random term is
//!    the seeded side-deck jitter.
//!
//! ## Architecture
//!
//! - **Alpha-Beta Search**: Iterative deepening with per-node breadth
//!   limits, all derived from an AI level (1-10).
//!
//! - **Persistent Data Structures**: Cheap per-node cloning via `im-rs`.
//!
//! - **Tick-Driven Driver**: `AiPlayer::tick` advances an explicit state
//!   machine; the host owns the clock.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, actions, match state, errors
//! - `cards`: Card and ability definitions and instances
//! - `rules`: `ActionCatalog` and `RulesEngine` traits
//! - `search`: Alpha-beta search, evaluator, configuration
//! - `heuristics`: Side-deck pick
//! - `agent`: Gameplay contract, executor, worker, driver
//! - `games`: The standard reference game and an in-memory match

pub mod agent;
pub mod cards;
pub mod core;
pub mod games;
pub mod heuristics;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, AiError, GamePhase, GameRng, MatchState, PendingSelection, PlayerId,
    PlayerMap, PlayerState, Result, SelectionKind,
};

pub use crate::cards::{
    AbilityData, AbilityId, Card, CardData, CardId, CardRegistry, CardType, CardUid, Slot,
};

pub use crate::rules::{ActionCatalog, GameResult, RulesEngine};

pub use crate::search::{
    BoardEvaluator, CancelToken, EvalWeights, Evaluator, SearchConfig, SearchEngine, SearchStats,
    WIN_SCORE,
};

pub use crate::heuristics::{Jitter, NoJitter, ScoredCard, SideDeckSelector, UniformJitter};

pub use crate::agent::{
    ActionExecutor, AiPlayer, DriverConfig, DriverPhase, Execution, Gameplay, SearchReport,
    SearchWorker,
};
