//! Starter card set for the standard game.

use crate::cards::{
    AbilityData, AbilityId, AbilityRegistry, AbilityTarget, AbilityTrigger, CardData, CardId,
    CardRegistry, CardType, Effect,
};

pub const SPARK: AbilityId = AbilityId::new(1);
pub const MEND: AbilityId = AbilityId::new(2);
pub const INSIGHT: AbilityId = AbilityId::new(3);
pub const RALLY: AbilityId = AbilityId::new(4);
pub const CALL: AbilityId = AbilityId::new(5);
pub const FIREBALL: AbilityId = AbilityId::new(6);
pub const OMEN: AbilityId = AbilityId::new(7);
pub const VOLLEY: AbilityId = AbilityId::new(8);
pub const SMITE: AbilityId = AbilityId::new(9);

/// Ability definitions used by the starter set.
#[must_use]
pub fn starter_abilities() -> AbilityRegistry {
    let mut abilities = AbilityRegistry::new();
    for ability in [
        AbilityData::new(SPARK, "Spark", AbilityTrigger::OnPlay, AbilityTarget::SelectCard, Effect::Damage(2)),
        AbilityData::new(MEND, "Mend", AbilityTrigger::OnPlay, AbilityTarget::SelfPlayer, Effect::Heal(4)),
        AbilityData::new(INSIGHT, "Insight", AbilityTrigger::OnPlay, AbilityTarget::None, Effect::Draw(2)),
        AbilityData::new(
            RALLY,
            "Rally",
            AbilityTrigger::Activate,
            AbilityTarget::SelectCard,
            Effect::Buff { attack: 1, hp: 1 },
        )
        .with_cost(1),
        AbilityData::new(
            CALL,
            "Call",
            AbilityTrigger::Activate,
            AbilityTarget::SelectSlot,
            Effect::Summon { attack: 1, hp: 1 },
        )
        .with_cost(2),
        AbilityData::new(FIREBALL, "Fireball", AbilityTrigger::OnPlay, AbilityTarget::Cost, Effect::Damage(0)),
        AbilityData::new(
            OMEN,
            "Omen",
            AbilityTrigger::OnPlay,
            AbilityTarget::Choice(vec![Effect::Damage(3), Effect::Draw(1)]),
            Effect::Damage(0),
        ),
        AbilityData::new(VOLLEY, "Volley", AbilityTrigger::Activate, AbilityTarget::Opponent, Effect::Damage(1))
            .with_cost(1),
        AbilityData::new(SMITE, "Smite", AbilityTrigger::OnPlay, AbilityTarget::SelectPlayer, Effect::Damage(3)),
    ] {
        abilities.register(ability);
    }
    abilities
}

/// Card definitions used by the starter set.
///
/// Ids 1..=12 are main-deck cards; 20.. are side-deck cards.
#[must_use]
pub fn starter_cards() -> CardRegistry {
    let mut cards = CardRegistry::new();
    for card in [
        CardData::new(CardId::new(1), "Squire", CardType::Character).with_cost(1).with_stats(1, 2),
        CardData::new(CardId::new(2), "Archer", CardType::Character)
            .with_cost(2)
            .with_stats(2, 1)
            .with_ability(VOLLEY),
        CardData::new(CardId::new(3), "Knight", CardType::Character).with_cost(3).with_stats(3, 3),
        CardData::new(CardId::new(4), "Banner Knight", CardType::Character)
            .with_cost(3)
            .with_stats(2, 3)
            .with_ability(RALLY),
        CardData::new(CardId::new(5), "Ogre", CardType::Character).with_cost(5).with_stats(5, 5),
        CardData::new(CardId::new(6), "Summoner", CardType::Character)
            .with_cost(4)
            .with_stats(2, 4)
            .with_ability(CALL),
        CardData::new(CardId::new(7), "Spark", CardType::Spell).with_cost(1).with_ability(SPARK),
        CardData::new(CardId::new(8), "Mend", CardType::Spell).with_cost(2).with_ability(MEND),
        CardData::new(CardId::new(9), "Insight", CardType::Spell).with_cost(2).with_ability(INSIGHT),
        CardData::new(CardId::new(10), "Fireball", CardType::Spell).with_cost(1).with_ability(FIREBALL),
        CardData::new(CardId::new(11), "Totem", CardType::Artifact).with_cost(2).with_stats(0, 4),
        CardData::new(CardId::new(12), "Omen", CardType::Spell).with_cost(2).with_ability(OMEN),
        CardData::new(CardId::new(20), "Champion", CardType::Character).with_cost(6).with_stats(6, 6),
        CardData::new(CardId::new(21), "Smite", CardType::Spell).with_cost(3).with_ability(SMITE),
        CardData::new(CardId::new(22), "War Chief", CardType::Character)
            .with_cost(5)
            .with_stats(4, 5)
            .with_ability(RALLY),
    ] {
        cards.register(card);
    }
    cards
}

/// Main-deck card ids, cycled when building decks.
pub const MAIN_DECK: [u32; 12] = [1, 2, 3, 7, 4, 8, 1, 5, 10, 9, 11, 6];

/// Side-deck card ids, cycled when building side decks.
pub const SIDE_DECK: [u32; 3] = [20, 21, 22];
