//! Rules traits for game implementations.
//!
//! Games implement `ActionCatalog` to enumerate what a player may do, and
//! `RulesEngine` to apply an action to a state and detect the end of the
//! match. The search only ever calls `apply_action` on its own clones.

use serde::{Deserialize, Serialize};

use crate::cards::{AbilityData, AbilityId};
use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::MatchState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

/// Enumerates legal actions.
///
/// Returns an empty vec if the player can't act. The order of the returned
/// actions is stable for identical states; the search relies on it for
/// tie-breaking.
pub trait ActionCatalog {
    fn legal_actions(&self, state: &MatchState, player: PlayerId) -> Vec<Action>;
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action`: Must be deterministic; illegal actions are ignored
/// - `result`: Return None if the game continues
pub trait RulesEngine: ActionCatalog {
    /// Apply an action to the game state.
    fn apply_action(&self, state: &mut MatchState, player: PlayerId, action: &Action);

    /// Check if the game is over.
    fn result(&self, state: &MatchState) -> Option<GameResult>;

    /// Look up an ability definition.
    fn ability(&self, id: AbilityId) -> Option<&AbilityData>;

    /// Whether `action` is currently legal for `player`.
    fn is_legal(&self, state: &MatchState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}
