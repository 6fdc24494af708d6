//! Card definitions - static card data.
//!
//! `CardData` holds the printed properties of a card: its type, cost, stats
//! and abilities. The match builder instantiates `Card`s from these.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ability::AbilityId;

/// Identifier of a card definition (not of an instance in a match).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    /// Occupies a board slot, can attack and be attacked.
    Character,
    /// One-shot effect, goes to the discard after resolving.
    Spell,
    /// Occupies a board slot, never attacks.
    Artifact,
}

/// Static card definition.
///
/// ```
/// use tcg_ai::cards::{CardData, CardId, CardType};
///
/// let knight = CardData::new(CardId::new(1), "Knight", CardType::Character)
///     .with_cost(3)
///     .with_stats(3, 4);
///
/// assert_eq!(knight.attack, 3);
/// assert_eq!(knight.hp, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardData {
    pub id: CardId,

    /// Display title (used in logs).
    pub title: String,

    pub card_type: CardType,

    /// Mana cost to play.
    pub mana: i32,

    pub attack: i32,

    pub hp: i32,

    /// Abilities printed on the card, in resolution order.
    pub abilities: SmallVec<[AbilityId; 2]>,
}

impl CardData {
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id,
            title: title.into(),
            card_type,
            mana: 0,
            attack: 0,
            hp: 0,
            abilities: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, mana: i32) -> Self {
        self.mana = mana;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, attack: i32, hp: i32) -> Self {
        self.attack = attack;
        self.hp = hp;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: AbilityId) -> Self {
        self.abilities.push(ability);
        self
    }
}
