//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy in a match. It carries its own copy of the
//! printed stats because effects (buffs, damage) modify them in place.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ability::AbilityId;
use super::definition::{CardData, CardId, CardType};
use crate::core::player::PlayerId;

/// Number of board slots per player.
pub const BOARD_SLOTS: u8 = 5;

/// Unique identifier of a card instance within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Board position on the owner's side. `Slot::NONE` means "not on the board".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot(pub u8);

impl Slot {
    pub const NONE: Slot = Slot(0);

    #[must_use]
    pub const fn new(x: u8) -> Self {
        Self(x)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// All valid board slots, left to right.
    pub fn all() -> impl Iterator<Item = Slot> {
        (1..=BOARD_SLOTS).map(Slot)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "Slot(none)")
        } else {
            write!(f, "Slot({})", self.0)
        }
    }
}

/// A card in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub uid: CardUid,
    pub card_id: CardId,
    pub title: String,
    pub card_type: CardType,
    pub owner: PlayerId,
    pub mana: i32,
    pub attack: i32,
    /// Maximum hp (including buffs).
    pub hp: i32,
    /// Damage taken while on the board.
    pub damage: i32,
    pub abilities: SmallVec<[AbilityId; 2]>,
    pub slot: Slot,
    /// Exhausted cards cannot attack, move or activate abilities this turn.
    pub exhausted: bool,
}

impl Card {
    /// Instantiate a definition for `owner`.
    #[must_use]
    pub fn from_data(uid: CardUid, data: &CardData, owner: PlayerId) -> Self {
        Self {
            uid,
            card_id: data.id,
            title: data.title.clone(),
            card_type: data.card_type,
            owner,
            mana: data.mana,
            attack: data.attack,
            hp: data.hp,
            damage: 0,
            abilities: data.abilities.clone(),
            slot: Slot::NONE,
            exhausted: false,
        }
    }

    /// Remaining hp.
    #[must_use]
    pub fn current_hp(&self) -> i32 {
        self.hp - self.damage
    }

    #[must_use]
    pub fn is_character(&self) -> bool {
        self.card_type == CardType::Character
    }

    #[must_use]
    pub fn has_abilities(&self) -> bool {
        !self.abilities.is_empty()
    }
}
