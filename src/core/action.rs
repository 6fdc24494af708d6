//! Action representation.
//!
//! An `Action` is one discrete legal move, carrying only the identifiers it
//! needs. Actions are value objects: produced fresh by the catalog for every
//! search node and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::MatchState;
use crate::cards::{AbilityId, CardUid, Slot};

/// Tag of an action, without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PlayCard,
    Attack,
    AttackPlayer,
    Move,
    CastAbility,
    SelectCard,
    SelectPlayer,
    SelectSlot,
    SelectChoice,
    SelectCost,
    SelectMulligan,
    CancelSelect,
    EndTurn,
    Resign,
}

/// A complete game action.
///
/// ```
/// use tcg_ai::cards::{CardUid, Slot};
/// use tcg_ai::core::{Action, ActionKind};
///
/// let play = Action::PlayCard { card: CardUid::new(4), slot: Slot::new(2) };
/// assert_eq!(play.kind(), ActionKind::PlayCard);
/// assert_eq!(play.card(), Some(CardUid::new(4)));
/// assert_eq!(Action::EndTurn.card(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play a card from hand. `slot` is `Slot::NONE` for spells.
    PlayCard { card: CardUid, slot: Slot },
    /// Attack an enemy board card.
    Attack { card: CardUid, target: CardUid },
    /// Attack the enemy player directly.
    AttackPlayer { card: CardUid, target_player: PlayerId },
    /// Move a board card to another free slot.
    Move { card: CardUid, slot: Slot },
    /// Activate a board card's ability.
    CastAbility { card: CardUid, ability: AbilityId },
    SelectCard { target: CardUid },
    SelectPlayer { target_player: PlayerId },
    SelectSlot { slot: Slot },
    SelectChoice { value: u8 },
    SelectCost { value: i32 },
    /// Finish the mulligan, keeping the whole hand.
    SelectMulligan,
    CancelSelect,
    EndTurn,
    Resign,
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::PlayCard { .. } => ActionKind::PlayCard,
            Action::Attack { .. } => ActionKind::Attack,
            Action::AttackPlayer { .. } => ActionKind::AttackPlayer,
            Action::Move { .. } => ActionKind::Move,
            Action::CastAbility { .. } => ActionKind::CastAbility,
            Action::SelectCard { .. } => ActionKind::SelectCard,
            Action::SelectPlayer { .. } => ActionKind::SelectPlayer,
            Action::SelectSlot { .. } => ActionKind::SelectSlot,
            Action::SelectChoice { .. } => ActionKind::SelectChoice,
            Action::SelectCost { .. } => ActionKind::SelectCost,
            Action::SelectMulligan => ActionKind::SelectMulligan,
            Action::CancelSelect => ActionKind::CancelSelect,
            Action::EndTurn => ActionKind::EndTurn,
            Action::Resign => ActionKind::Resign,
        }
    }

    /// The acting card, if any.
    #[must_use]
    pub fn card(&self) -> Option<CardUid> {
        match self {
            Action::PlayCard { card, .. }
            | Action::Attack { card, .. }
            | Action::AttackPlayer { card, .. }
            | Action::Move { card, .. }
            | Action::CastAbility { card, .. } => Some(*card),
            _ => None,
        }
    }

    /// Whether this action answers a pending selection.
    #[must_use]
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Action::SelectCard { .. }
                | Action::SelectPlayer { .. }
                | Action::SelectSlot { .. }
                | Action::SelectChoice { .. }
                | Action::SelectCost { .. }
                | Action::CancelSelect
        )
    }

    /// Human-readable description, resolving card titles through `state`.
    #[must_use]
    pub fn describe(&self, state: &MatchState) -> String {
        let title = |uid: &CardUid| {
            state
                .card(*uid)
                .map(|c| format!("{} {}", c.title, uid))
                .unwrap_or_else(|| format!("card {}", uid))
        };

        match self {
            Action::PlayCard { card, slot } if slot.is_none() => format!("play {}", title(card)),
            Action::PlayCard { card, slot } => format!("play {} to {}", title(card), slot),
            Action::Attack { card, target } => {
                format!("{} attacks {}", title(card), title(target))
            }
            Action::AttackPlayer {
                card,
                target_player,
            } => format!("{} attacks {}", title(card), target_player),
            Action::Move { card, slot } => format!("move {} to {}", title(card), slot),
            Action::CastAbility { card, ability } => {
                format!("{} casts {}", title(card), ability)
            }
            Action::SelectCard { target } => format!("select {}", title(target)),
            Action::SelectPlayer { target_player } => format!("select {}", target_player),
            Action::SelectSlot { slot } => format!("select {}", slot),
            Action::SelectChoice { value } => format!("choose option {}", value),
            Action::SelectCost { value } => format!("pay {}", value),
            Action::SelectMulligan => "keep hand".to_string(),
            Action::CancelSelect => "cancel selection".to_string(),
            Action::EndTurn => "end turn".to_string(),
            Action::Resign => "resign".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardData, CardId, CardType};

    #[test]
    fn test_kind_and_card() {
        let attack = Action::Attack {
            card: CardUid::new(1),
            target: CardUid::new(2),
        };
        assert_eq!(attack.kind(), ActionKind::Attack);
        assert_eq!(attack.card(), Some(CardUid::new(1)));

        let select = Action::SelectCard {
            target: CardUid::new(2),
        };
        assert_eq!(select.card(), None);
        assert!(select.is_selection());
        assert!(!Action::EndTurn.is_selection());
        assert_eq!(Action::Resign.kind(), ActionKind::Resign);
    }

    #[test]
    fn test_describe() {
        let mut state = MatchState::new(30);
        let uid = state.alloc_uid();
        let data = CardData::new(CardId::new(1), "Knight", CardType::Character);
        let card = Card::from_data(uid, &data, PlayerId::new(0));
        state.player_mut(PlayerId::new(0)).hand.push_back(card);

        let play = Action::PlayCard {
            card: uid,
            slot: Slot::new(2),
        };
        assert_eq!(play.describe(&state), "play Knight #1 to Slot(2)");

        let stale = Action::AttackPlayer {
            card: CardUid::new(77),
            target_player: PlayerId::new(1),
        };
        assert_eq!(stale.describe(&state), "card #77 attacks Player 1");
        assert_eq!(Action::EndTurn.describe(&state), "end turn");
    }

    #[test]
    fn test_serialization() {
        let action = Action::CastAbility {
            card: CardUid::new(3),
            ability: AbilityId::new(9),
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
