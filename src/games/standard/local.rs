//! In-process match implementing the gameplay contract.

use std::sync::Arc;

use tracing::trace;

use super::rules::StandardRules;
use crate::agent::Gameplay;
use crate::cards::{AbilityData, AbilityId, CardUid, Slot};
use crate::core::{Action, MatchState, PlayerId};
use crate::rules::{GameResult, RulesEngine};

/// A standard match running in memory.
///
/// Every command is applied through `StandardRules`, so illegal commands are
/// ignored exactly as the rules ignore illegal actions. Applied commands are
/// recorded in `history`.
#[derive(Clone, Debug)]
pub struct LocalMatch {
    rules: Arc<StandardRules>,
    state: MatchState,
    history: Vec<(PlayerId, Action)>,
}

impl LocalMatch {
    pub fn new(rules: Arc<StandardRules>, state: MatchState) -> Self {
        Self {
            rules,
            state,
            history: Vec::new(),
        }
    }

    /// Shared rules, for handing to an AI player.
    pub fn rules(&self) -> Arc<StandardRules> {
        Arc::clone(&self.rules)
    }

    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// Commands that changed the state, in order.
    pub fn history(&self) -> &[(PlayerId, Action)] {
        &self.history
    }

    pub fn result(&self) -> Option<GameResult> {
        self.rules.result(&self.state)
    }

    /// Apply an action for `player`; returns whether the state changed.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> bool {
        let before = self.state.clone();
        self.rules.apply_action(&mut self.state, player, &action);
        self.record(player, action, before)
    }

    fn record(&mut self, player: PlayerId, action: Action, before: MatchState) -> bool {
        let changed = before != self.state;
        if changed {
            trace!(%player, ?action, "applied");
            self.history.push((player, action));
        }
        changed
    }
}

impl Gameplay for LocalMatch {
    fn match_state(&self) -> &MatchState {
        &self.state
    }

    fn ability(&self, id: AbilityId) -> Option<&AbilityData> {
        self.rules.ability(id)
    }

    fn play_card(&mut self, player: PlayerId, card: CardUid, slot: Slot) {
        self.apply(player, Action::PlayCard { card, slot });
    }

    fn move_card(&mut self, player: PlayerId, card: CardUid, slot: Slot) {
        self.apply(player, Action::Move { card, slot });
    }

    fn attack_target(&mut self, player: PlayerId, attacker: CardUid, target: CardUid) {
        self.apply(player, Action::Attack { card: attacker, target });
    }

    fn attack_player(&mut self, player: PlayerId, attacker: CardUid, target: PlayerId) {
        self.apply(
            player,
            Action::AttackPlayer {
                card: attacker,
                target_player: target,
            },
        );
    }

    fn cast_ability(&mut self, player: PlayerId, card: CardUid, ability: AbilityId) {
        self.apply(player, Action::CastAbility { card, ability });
    }

    fn select_card(&mut self, player: PlayerId, target: CardUid) {
        self.apply(player, Action::SelectCard { target });
    }

    fn select_player(&mut self, player: PlayerId, target: PlayerId) {
        self.apply(player, Action::SelectPlayer { target_player: target });
    }

    fn select_slot(&mut self, player: PlayerId, slot: Slot) {
        self.apply(player, Action::SelectSlot { slot });
    }

    fn select_choice(&mut self, player: PlayerId, value: u8) {
        self.apply(player, Action::SelectChoice { value });
    }

    fn select_cost(&mut self, player: PlayerId, value: i32) {
        self.apply(player, Action::SelectCost { value });
    }

    fn cancel_selection(&mut self, player: PlayerId) {
        self.apply(player, Action::CancelSelect);
    }

    fn mulligan(&mut self, player: PlayerId, discarded: &[CardUid]) {
        let before = self.state.clone();
        self.rules.mulligan(&mut self.state, player, discarded);
        self.record(player, Action::SelectMulligan, before);
    }

    fn end_turn(&mut self, player: PlayerId) {
        self.apply(player, Action::EndTurn);
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.rules.end_game(&mut self.state, GameResult::Winner(winner));
    }

    fn select_side_deck_card(&mut self, player: PlayerId, card: CardUid) {
        self.rules.select_side_card(&mut self.state, player, card);
    }
}
