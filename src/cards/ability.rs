//! Ability definitions.
//!
//! An ability is a trigger, a target rule and an effect. Abilities whose
//! target must be chosen (`SelectCard`, `SelectPlayer`, `SelectSlot`,
//! `Choice`, `Cost`) open a pending selection that the owning player answers
//! with a `Select*` action.

use serde::{Deserialize, Serialize};

/// Identifier of an ability definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AbilityId(pub u16);

impl AbilityId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AbilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ability({})", self.0)
    }
}

/// When an ability fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityTrigger {
    /// Resolves when the card is played.
    OnPlay,
    /// Cast from the board with `CastAbility`; exhausts the caster.
    Activate,
}

/// What an ability does once its target is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Damage a card or a player.
    Damage(i32),
    /// Restore hp on a card or a player, capped at its maximum.
    Heal(i32),
    /// Draw cards for the caster's owner.
    Draw(u32),
    /// Permanently raise a card's attack and hp.
    Buff { attack: i32, hp: i32 },
    /// Put a token character into a slot.
    Summon { attack: i32, hp: i32 },
}

/// How the target of an ability is determined.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityTarget {
    /// No target (e.g. draw).
    None,
    /// The caster's owner.
    SelfPlayer,
    /// The caster owner's opponent.
    Opponent,
    /// Any card on either board, chosen with `SelectCard`.
    SelectCard,
    /// Either player, chosen with `SelectPlayer`.
    SelectPlayer,
    /// A free slot on the caster's side, chosen with `SelectSlot`.
    SelectSlot,
    /// One of several effects, chosen with `SelectChoice`; each resolves
    /// against its default target.
    Choice(Vec<Effect>),
    /// Pay X extra mana, chosen with `SelectCost`; the effect amount becomes X
    /// and it resolves against its default target.
    Cost,
}

impl AbilityTarget {
    /// Whether resolving needs an answer from the player.
    #[must_use]
    pub fn needs_selection(&self) -> bool {
        !matches!(
            self,
            AbilityTarget::None | AbilityTarget::SelfPlayer | AbilityTarget::Opponent
        )
    }
}

/// Static ability definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    pub id: AbilityId,
    pub title: String,
    pub trigger: AbilityTrigger,
    pub target: AbilityTarget,
    pub effect: Effect,
    /// Mana paid when activated (on-play abilities are covered by the card cost).
    pub mana: i32,
}

impl AbilityData {
    #[must_use]
    pub fn new(
        id: AbilityId,
        title: impl Into<String>,
        trigger: AbilityTrigger,
        target: AbilityTarget,
        effect: Effect,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            trigger,
            target,
            effect,
            mana: 0,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, mana: i32) -> Self {
        self.mana = mana;
        self
    }
}
