//! Match state snapshot.
//!
//! ## PlayerState
//!
//! Everything one seat owns: hp, mana, and the five card zones (hand, board,
//! deck, discard, side deck), plus the mulligan and side-deck flags.
//!
//! ## MatchState
//!
//! Phase, turn, current player, both `PlayerState`s, the pending selection
//! and the result. Zones are `im::Vector`s so a snapshot clone shares
//! structure with its parent; the search clones one per explored node.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::cards::{AbilityId, Card, CardUid, Slot};
use crate::rules::GameResult;

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Players decide which opening cards to redraw.
    Mulligan,
    /// Players pick one card from their side deck.
    SideDeckSelection,
    /// Regular turns.
    Main,
    /// The match has a result.
    Ended,
}

/// What a pending selection expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionKind {
    Card,
    Player,
    Slot,
    /// Index into the ability's choice list, `0..n`.
    Choice(u8),
    /// Extra mana to pay, `0..=max`.
    Cost(i32),
}

/// An ability waiting for its owner to pick a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingSelection {
    pub player: PlayerId,
    pub caster: CardUid,
    pub ability: AbilityId,
    pub kind: SelectionKind,
}

/// Per-seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: PlayerId,
    pub hp: i32,
    pub hp_max: i32,
    pub mana: i32,
    pub mana_max: i32,
    pub hand: Vector<Card>,
    pub board: Vector<Card>,
    /// Top of the deck is the front.
    pub deck: Vector<Card>,
    pub discard: Vector<Card>,
    pub side_deck: Vector<Card>,
    pub side_deck_selected: bool,
    pub mulligan_done: bool,
}

impl PlayerState {
    #[must_use]
    pub fn new(player_id: PlayerId, hp: i32) -> Self {
        Self {
            player_id,
            hp,
            hp_max: hp,
            mana: 0,
            mana_max: 0,
            hand: Vector::new(),
            board: Vector::new(),
            deck: Vector::new(),
            discard: Vector::new(),
            side_deck: Vector::new(),
            side_deck_selected: false,
            mulligan_done: false,
        }
    }

    #[must_use]
    pub fn has_side_cards(&self) -> bool {
        !self.side_deck.is_empty()
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Hand + board + deck size.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.board.len() + self.deck.len()
    }

    /// Sum of attack over board characters.
    #[must_use]
    pub fn board_attack(&self) -> i32 {
        self.board
            .iter()
            .filter(|c| c.is_character())
            .map(|c| c.attack.max(0))
            .sum()
    }

    /// Sum of remaining hp over board cards.
    #[must_use]
    pub fn board_hp(&self) -> i32 {
        self.board.iter().map(|c| c.current_hp().max(0)).sum()
    }

    #[must_use]
    pub fn hand_card(&self, uid: CardUid) -> Option<&Card> {
        self.hand.iter().find(|c| c.uid == uid)
    }

    #[must_use]
    pub fn board_card(&self, uid: CardUid) -> Option<&Card> {
        self.board.iter().find(|c| c.uid == uid)
    }

    #[must_use]
    pub fn side_card(&self, uid: CardUid) -> Option<&Card> {
        self.side_deck.iter().find(|c| c.uid == uid)
    }

    /// Look a card up in every zone.
    #[must_use]
    pub fn find_card(&self, uid: CardUid) -> Option<&Card> {
        self.hand
            .iter()
            .chain(self.board.iter())
            .chain(self.deck.iter())
            .chain(self.discard.iter())
            .chain(self.side_deck.iter())
            .find(|c| c.uid == uid)
    }

    #[must_use]
    pub fn is_slot_free(&self, slot: Slot) -> bool {
        !slot.is_none() && self.board.iter().all(|c| c.slot != slot)
    }

    /// Leftmost free board slot.
    #[must_use]
    pub fn free_slot(&self) -> Option<Slot> {
        Slot::all().find(|&s| self.is_slot_free(s))
    }

    /// All free board slots, left to right.
    pub fn free_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::all().filter(move |&s| self.is_slot_free(s))
    }
}

/// Full snapshot of a match in progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: GamePhase,

    /// Turn number (starts at 1 when the main phase begins).
    pub turn: u32,

    /// Whose turn it is.
    pub current_player: PlayerId,

    pub players: PlayerMap<PlayerState>,

    /// Ability waiting for a `Select*` answer.
    pub selection: Option<PendingSelection>,

    pub result: Option<GameResult>,

    next_uid: u32,
}

impl MatchState {
    /// Create an empty match in the mulligan phase.
    #[must_use]
    pub fn new(hp: i32) -> Self {
        Self {
            phase: GamePhase::Mulligan,
            turn: 0,
            current_player: PlayerId::new(0),
            players: PlayerMap::new(|p| PlayerState::new(p, hp)),
            selection: None,
            result: None,
            next_uid: 1,
        }
    }

    /// Allocate a card uid.
    pub fn alloc_uid(&mut self) -> CardUid {
        let uid = CardUid::new(self.next_uid);
        self.next_uid += 1;
        uid
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id]
    }

    #[must_use]
    pub fn opponent(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.opponent()]
    }

    /// Look a card up in any zone of either player.
    #[must_use]
    pub fn card(&self, uid: CardUid) -> Option<&Card> {
        PlayerId::all().find_map(|p| self.players[p].find_card(uid))
    }

    /// Look a card up on either board.
    #[must_use]
    pub fn board_card(&self, uid: CardUid) -> Option<&Card> {
        PlayerId::all().find_map(|p| self.players[p].board_card(uid))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    #[must_use]
    pub fn is_player_turn(&self, player: PlayerId) -> bool {
        self.phase == GamePhase::Main && self.current_player == player
    }

    #[must_use]
    pub fn is_mulligan_turn(&self, player: PlayerId) -> bool {
        self.phase == GamePhase::Mulligan && !self.players[player].mulligan_done
    }

    /// The player expected to act next: the owner of a pending selection,
    /// otherwise the player whose turn it is.
    #[must_use]
    pub fn acting_player(&self) -> PlayerId {
        match self.phase {
            GamePhase::Mulligan => PlayerId::all()
                .find(|&p| !self.players[p].mulligan_done)
                .unwrap_or(self.current_player),
            _ => self
                .selection
                .map(|s| s.player)
                .unwrap_or(self.current_player),
        }
    }
}
