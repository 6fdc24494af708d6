//! Core types: players, RNG, actions, match state, errors.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind};
pub use error::{AiError, Result};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{GamePhase, MatchState, PendingSelection, PlayerState, SelectionKind};
