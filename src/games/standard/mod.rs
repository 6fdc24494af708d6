//! Standard two-player card game.
//!
//! A compact reference game for the AI:
//! - Each player starts with 20 hp, a shuffled deck and a small side deck
//! - Mulligan, then a one-card side-deck pick, then alternating turns
//! - Mana ramps by one per turn up to 10
//! - Characters fight on five board slots; spells and abilities may ask the
//!   caster to pick a card, player, slot, option or amount
//! - A player at 0 hp loses; hitting the turn limit is a draw

pub mod cards;
mod builder;
mod local;
mod rules;

pub use builder::MatchBuilder;
pub use local::LocalMatch;
pub use rules::{StandardRules, MAX_HAND, MAX_MANA, TOKEN_CARD};
