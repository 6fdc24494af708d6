//! Gameplay contract between the AI and the match it plays in.
//!
//! The AI core never mutates match state directly. It reads through the
//! query half of this trait and acts only through the command half; the
//! implementor owns validation and decides whether a command takes effect.

use crate::cards::{AbilityData, AbilityId, Card, CardUid, Slot};
use crate::core::{MatchState, PlayerId, PlayerState};

/// Access to a running match.
pub trait Gameplay {
    // === Queries ===

    /// Current match snapshot.
    fn match_state(&self) -> &MatchState;

    fn player(&self, id: PlayerId) -> &PlayerState {
        self.match_state().player(id)
    }

    fn opponent(&self, id: PlayerId) -> &PlayerState {
        self.match_state().opponent(id)
    }

    /// Any card of either player, in any zone.
    fn card(&self, uid: CardUid) -> Option<&Card> {
        self.match_state().card(uid)
    }

    fn ability(&self, id: AbilityId) -> Option<&AbilityData>;

    fn is_player_turn(&self, player: PlayerId) -> bool {
        self.match_state().is_player_turn(player)
    }

    fn is_mulligan_turn(&self, player: PlayerId) -> bool {
        self.match_state().is_mulligan_turn(player)
    }

    /// Whether `player` may issue turn commands right now.
    fn can_play(&self, player: PlayerId) -> bool {
        let state = self.match_state();
        !state.is_finished() && state.is_player_turn(player)
    }

    // === Commands ===

    fn play_card(&mut self, player: PlayerId, card: CardUid, slot: Slot);
    fn move_card(&mut self, player: PlayerId, card: CardUid, slot: Slot);
    fn attack_target(&mut self, player: PlayerId, attacker: CardUid, target: CardUid);
    fn attack_player(&mut self, player: PlayerId, attacker: CardUid, target: PlayerId);
    fn cast_ability(&mut self, player: PlayerId, card: CardUid, ability: AbilityId);
    fn select_card(&mut self, player: PlayerId, target: CardUid);
    fn select_player(&mut self, player: PlayerId, target: PlayerId);
    fn select_slot(&mut self, player: PlayerId, slot: Slot);
    fn select_choice(&mut self, player: PlayerId, value: u8);
    fn select_cost(&mut self, player: PlayerId, value: i32);
    fn cancel_selection(&mut self, player: PlayerId);

    /// Finish the mulligan, redrawing `discarded`.
    fn mulligan(&mut self, player: PlayerId, discarded: &[CardUid]);

    fn end_turn(&mut self, player: PlayerId);

    /// End the match with `winner` as the winner.
    fn end_game(&mut self, winner: PlayerId);

    /// Move a side-deck card into the hand.
    fn select_side_deck_card(&mut self, player: PlayerId, card: CardUid);
}
