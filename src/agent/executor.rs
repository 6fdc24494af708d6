//! Turns a chosen action into gameplay commands.
//!
//! Every id in the action is resolved against the live game first. A stale
//! id (the card died, the ability is gone) skips the action quietly; the
//! driver will simply decide again on a later tick.

use tracing::debug;

use super::gameplay::Gameplay;
use crate::cards::CardUid;
use crate::core::{Action, PlayerId, PLAYER_COUNT};

/// Whether an action reached the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Execution {
    Applied,
    Ignored,
}

/// Stateless action dispatcher.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionExecutor;

impl ActionExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Issue the command for `action` on behalf of `player`.
    pub fn execute<G: Gameplay + ?Sized>(&self, game: &mut G, player: PlayerId, action: &Action) -> Execution {
        if !game.can_play(player) {
            debug!(%player, ?action, "not our turn, action ignored");
            return Execution::Ignored;
        }

        match *action {
            Action::PlayCard { card, slot } => {
                if !has_card(game, card) {
                    return stale(player, action);
                }
                game.play_card(player, card, slot);
            }
            Action::Attack { card, target } => {
                if !has_card(game, card) || !has_card(game, target) {
                    return stale(player, action);
                }
                game.attack_target(player, card, target);
            }
            Action::AttackPlayer { card, target_player } => {
                if !has_card(game, card) || target_player.index() >= PLAYER_COUNT {
                    return stale(player, action);
                }
                game.attack_player(player, card, target_player);
            }
            Action::Move { card, slot } => {
                if !has_card(game, card) {
                    return stale(player, action);
                }
                game.move_card(player, card, slot);
            }
            Action::CastAbility { card, ability } => {
                if !has_card(game, card) || game.ability(ability).is_none() {
                    return stale(player, action);
                }
                game.cast_ability(player, card, ability);
            }
            Action::SelectCard { target } => {
                if !has_card(game, target) {
                    return stale(player, action);
                }
                game.select_card(player, target);
            }
            Action::SelectPlayer { target_player } => {
                if target_player.index() >= PLAYER_COUNT {
                    return stale(player, action);
                }
                game.select_player(player, target_player);
            }
            Action::SelectSlot { slot } => {
                if slot.is_none() {
                    return stale(player, action);
                }
                game.select_slot(player, slot);
            }
            Action::SelectChoice { value } => game.select_choice(player, value),
            Action::SelectCost { value } => game.select_cost(player, value),
            Action::SelectMulligan => game.mulligan(player, &[]),
            Action::CancelSelect => game.cancel_selection(player),
            Action::EndTurn => game.end_turn(player),
            Action::Resign => game.end_game(player.opponent()),
        }

        Execution::Applied
    }
}

fn has_card<G: Gameplay + ?Sized>(game: &G, uid: CardUid) -> bool {
    game.card(uid).is_some()
}

fn stale(player: PlayerId, action: &Action) -> Execution {
    debug!(%player, ?action, "stale reference, action skipped");
    Execution::Ignored
}
