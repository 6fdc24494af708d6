//! Card and ability registries.
//!
//! Definitions are looked up by id. Registries are built once per match and
//! shared read-only by the rules, the executor and the search.

use rustc_hash::FxHashMap;

use super::ability::{AbilityData, AbilityId};
use super::definition::{CardData, CardId};

/// Registry of card definitions.
///
/// ```
/// use tcg_ai::cards::{CardData, CardId, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardData::new(CardId::new(1), "Squire", CardType::Character));
///
/// assert_eq!(registry.get(CardId::new(1)).unwrap().title, "Squire");
/// assert!(registry.get(CardId::new(2)).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardData>,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, returning the one it replaced if the id was taken.
    pub fn register(&mut self, card: CardData) -> Option<CardData> {
        self.cards.insert(card.id, card)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardData> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All definitions, sorted by id so deck construction is deterministic.
    #[must_use]
    pub fn sorted(&self) -> Vec<&CardData> {
        let mut cards: Vec<_> = self.cards.values().collect();
        cards.sort_by_key(|c| c.id);
        cards
    }
}

/// Registry of ability definitions.
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    abilities: FxHashMap<AbilityId, AbilityData>,
}

impl AbilityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, ability: AbilityData) -> Option<AbilityData> {
        self.abilities.insert(ability.id, ability)
    }

    #[must_use]
    pub fn get(&self, id: AbilityId) -> Option<&AbilityData> {
        self.abilities.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AbilityTarget, AbilityTrigger, CardType, Effect};

    #[test]
    fn test_register_replaces() {
        let mut registry = CardRegistry::new();
        assert!(registry
            .register(CardData::new(CardId::new(1), "A", CardType::Spell))
            .is_none());
        let old = registry.register(CardData::new(CardId::new(1), "B", CardType::Spell));

        assert_eq!(old.map(|c| c.title), Some("A".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(CardId::new(1)).unwrap().title, "B");
    }

    #[test]
    fn test_sorted() {
        let mut registry = CardRegistry::new();
        registry.register(CardData::new(CardId::new(3), "C", CardType::Character));
        registry.register(CardData::new(CardId::new(1), "A", CardType::Character));
        registry.register(CardData::new(CardId::new(2), "B", CardType::Spell));

        let ids: Vec<_> = registry.sorted().iter().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_ability_registry() {
        let mut registry = AbilityRegistry::new();
        assert!(registry.is_empty());

        registry.register(AbilityData::new(
            AbilityId::new(1),
            "Ping",
            AbilityTrigger::Activate,
            AbilityTarget::Opponent,
            Effect::Damage(1),
        ));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(AbilityId::new(1)).unwrap().title, "Ping");
        assert!(registry.get(AbilityId::new(2)).is_none());
    }
}
