//! Side-deck pick heuristic.
//!
//! Single-shot additive scoring: every side-deck card gets a score from its
//! own stats and the acting player's situation, plus a little jitter so the
//! AI doesn't always take the same card. The highest score wins; ties go to
//! the earlier card.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::core::{GameRng, PlayerState};

/// Jitter half-width.
pub const JITTER_RANGE: f64 = 10.0;

/// Source of the variety term.
pub trait Jitter {
    /// A value in `[-JITTER_RANGE, JITTER_RANGE]`.
    fn sample(&mut self) -> f64;
}

/// Uniform jitter from a seeded RNG.
#[derive(Clone, Debug)]
pub struct UniformJitter {
    rng: GameRng,
}

impl UniformJitter {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed).for_context("side_deck"))
    }
}

impl Jitter for UniformJitter {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range_f64(-JITTER_RANGE, JITTER_RANGE)
    }
}

/// Always zero; makes scoring a pure function of its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoJitter;

impl Jitter for NoJitter {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// A card with its score.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCard<'a> {
    pub card: &'a Card,
    pub score: f64,
}

/// Score weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideDeckWeights {
    pub attack: f64,
    pub hp: f64,
    pub spell: f64,
    pub per_ability: f64,
    /// Character bonus when the hand is small.
    pub low_hand: f64,
    /// Hand size below which `low_hand` applies.
    pub low_hand_size: usize,
    /// Spell bonus when behind on board.
    pub behind_spell: f64,
    /// Character bonus when behind on board and attack >= `behind_min_attack`.
    pub behind_character: f64,
    pub behind_min_attack: i32,
    /// Per-hp bonus when the player is low.
    pub low_hp_per_hp: f64,
}

impl Default for SideDeckWeights {
    fn default() -> Self {
        Self {
            attack: 10.0,
            hp: 8.0,
            spell: 50.0,
            per_ability: 15.0,
            low_hand: 20.0,
            low_hand_size: 3,
            behind_spell: 30.0,
            behind_character: 25.0,
            behind_min_attack: 3,
            low_hp_per_hp: 5.0,
        }
    }
}

/// Picks the side-deck card to take.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SideDeckSelector {
    weights: SideDeckWeights,
}

impl SideDeckSelector {
    pub fn new(weights: SideDeckWeights) -> Self {
        Self { weights }
    }

    /// Score one card for `player` facing `opponent`.
    pub fn score_card(&self, card: &Card, player: &PlayerState, opponent: &PlayerState, jitter: &mut impl Jitter) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;

        match card.card_type {
            CardType::Character => {
                score += f64::from(card.attack) * w.attack + f64::from(card.hp) * w.hp;
            }
            CardType::Spell => score += w.spell,
            CardType::Artifact => {}
        }

        score += card.abilities.len() as f64 * w.per_ability;

        if player.hand.len() < w.low_hand_size && card.is_character() {
            score += w.low_hand;
        }

        if opponent.board.len() > player.board.len() {
            match card.card_type {
                CardType::Spell => score += w.behind_spell,
                CardType::Character if card.attack >= w.behind_min_attack => score += w.behind_character,
                _ => {}
            }
        }

        // At or below a third of max hp.
        if i64::from(player.hp) * 3 <= i64::from(player.hp_max) && card.hp > 0 {
            score += f64::from(card.hp) * w.low_hp_per_hp;
        }

        score + jitter.sample().clamp(-JITTER_RANGE, JITTER_RANGE)
    }

    /// Best card by score, first in input order on ties. None if `cards` is empty.
    pub fn select_best<'a, I>(
        &self,
        cards: I,
        player: &PlayerState,
        opponent: &PlayerState,
        jitter: &mut impl Jitter,
    ) -> Option<ScoredCard<'a>>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut best: Option<ScoredCard<'a>> = None;
        for card in cards {
            let score = self.score_card(card, player, opponent, jitter);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(ScoredCard { card, score });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{AbilityId, CardData, CardId, CardUid, Slot};
    use crate::core::PlayerId;

    fn card(uid: u32, card_type: CardType, attack: i32, hp: i32) -> Card {
        let data = CardData::new(CardId::new(uid), "Test", card_type).with_stats(attack, hp);
        Card::from_data(CardUid::new(uid), &data, PlayerId::new(0))
    }

    fn player(hp: i32, hp_max: i32, hand: usize, board: usize) -> PlayerState {
        let mut ps = PlayerState::new(PlayerId::new(0), hp_max);
        ps.hp = hp;
        for i in 0..hand {
            ps.hand.push_back(card(100 + i as u32, CardType::Character, 1, 1));
        }
        for i in 0..board {
            let mut c = card(200 + i as u32, CardType::Character, 1, 1);
            c.slot = Slot::new(i as u8 + 1);
            ps.board.push_back(c);
        }
        ps
    }

    #[test]
    fn test_character_stats() {
        let selector = SideDeckSelector::default();
        let me = player(30, 30, 5, 0);
        let them = player(30, 30, 5, 0);

        let knight = card(1, CardType::Character, 3, 4);
        assert_eq!(selector.score_card(&knight, &me, &them, &mut NoJitter), 62.0);
    }

    #[test]
    fn test_abilities_and_artifacts() {
        let selector = SideDeckSelector::default();
        let me = player(30, 30, 5, 0);
        let them = player(30, 30, 5, 0);

        let mut totem = card(1, CardType::Artifact, 0, 4);
        assert_eq!(selector.score_card(&totem, &me, &them, &mut NoJitter), 0.0);

        totem.abilities.push(AbilityId::new(1));
        totem.abilities.push(AbilityId::new(2));
        assert_eq!(selector.score_card(&totem, &me, &them, &mut NoJitter), 30.0);
    }

    #[test]
    fn test_low_hand_prefers_characters() {
        let selector = SideDeckSelector::default();
        let me = player(30, 30, 2, 0);
        let them = player(30, 30, 5, 0);

        let squire = card(1, CardType::Character, 1, 1);
        let spell = card(2, CardType::Spell, 0, 0);
        assert_eq!(selector.score_card(&squire, &me, &them, &mut NoJitter), 38.0);
        assert_eq!(selector.score_card(&spell, &me, &them, &mut NoJitter), 50.0);
    }

    #[test]
    fn test_low_hp_bonus() {
        let selector = SideDeckSelector::default();
        let them = player(30, 30, 5, 0);
        let wall = card(1, CardType::Character, 1, 5);

        let low = player(10, 30, 3, 0);
        assert_eq!(selector.score_card(&wall, &low, &them, &mut NoJitter), 75.0);

        let healthy = player(11, 30, 3, 0);
        assert_eq!(selector.score_card(&wall, &healthy, &them, &mut NoJitter), 50.0);
    }

    #[test]
    fn test_low_hp_check_with_huge_hp() {
        let selector = SideDeckSelector::default();
        let them = player(30, 30, 5, 0);
        let wall = card(1, CardType::Character, 1, 5);

        let half = player(i32::MAX / 2, i32::MAX, 3, 0);
        assert_eq!(selector.score_card(&wall, &half, &them, &mut NoJitter), 50.0);

        let third = player(i32::MAX / 3, i32::MAX, 3, 0);
        assert_eq!(selector.score_card(&wall, &third, &them, &mut NoJitter), 75.0);
    }

    #[test]
    fn test_behind_on_board() {
        let selector = SideDeckSelector::default();
        let me = player(30, 30, 5, 1);
        let them = player(30, 30, 5, 3);

        let spell = card(1, CardType::Spell, 0, 0);
        assert!(selector.score_card(&spell, &me, &them, &mut NoJitter) >= 80.0);

        let brute = card(2, CardType::Character, 3, 1);
        let weak = card(3, CardType::Character, 2, 1);
        assert_eq!(selector.score_card(&brute, &me, &them, &mut NoJitter), 63.0);
        assert_eq!(selector.score_card(&weak, &me, &them, &mut NoJitter), 28.0);
    }

    #[test]
    fn test_select_best() {
        let selector = SideDeckSelector::default();
        let me = player(30, 30, 5, 0);
        let them = player(30, 30, 5, 0);
        let cards = vec![
            card(1, CardType::Character, 1, 1),
            card(2, CardType::Character, 4, 4),
            card(3, CardType::Spell, 0, 0),
        ];

        let best = selector.select_best(&cards, &me, &them, &mut NoJitter).unwrap();
        assert_eq!(best.card.uid, CardUid::new(2));
        assert_eq!(best.score, 72.0);

        let empty: Vec<Card> = Vec::new();
        assert!(selector.select_best(&empty, &me, &them, &mut NoJitter).is_none());
    }

    #[test]
    fn test_ties_keep_first() {
        let selector = SideDeckSelector::default();
        let me = player(30, 30, 5, 0);
        let them = player(30, 30, 5, 0);
        let cards = vec![card(7, CardType::Spell, 0, 0), card(8, CardType::Spell, 0, 0)];

        let best = selector.select_best(&cards, &me, &them, &mut NoJitter).unwrap();
        assert_eq!(best.card.uid, CardUid::new(7));
    }

    #[test]
    fn test_uniform_jitter_is_bounded_and_seeded() {
        let mut a = UniformJitter::from_seed(11);
        let mut b = UniformJitter::from_seed(11);
        for _ in 0..200 {
            let x = a.sample();
            assert!((-JITTER_RANGE..=JITTER_RANGE).contains(&x));
            assert_eq!(x, b.sample());
        }
    }
}
