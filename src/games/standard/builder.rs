//! Match setup for the standard game.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::cards::{starter_abilities, starter_cards, MAIN_DECK, SIDE_DECK};
use super::local::LocalMatch;
use super::rules::{build_zone, StandardRules};
use crate::cards::{AbilityRegistry, CardRegistry};
use crate::core::{GameRng, MatchState, PlayerId};

/// Builder for a standard match.
///
/// ```
/// use tcg_ai::games::standard::MatchBuilder;
///
/// let (rules, state) = MatchBuilder::new().hp(20).hand_size(4).build(7);
/// assert_eq!(state.players[tcg_ai::core::PlayerId::new(0)].hand.len(), 4);
/// assert_eq!(rules.turn_limit(), 60);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchBuilder {
    hp: i32,
    deck_size: usize,
    hand_size: usize,
    side_deck_size: usize,
    turn_limit: u32,
    #[serde(skip)]
    cards: Option<(CardRegistry, AbilityRegistry)>,
}

impl Default for MatchBuilder {
    fn default() -> Self {
        Self {
            hp: 20,
            deck_size: 20,
            hand_size: 3,
            side_deck_size: 3,
            turn_limit: 60,
            cards: None,
        }
    }
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Side-deck cards per player (0 skips the side-deck phase).
    pub fn side_deck_size(mut self, size: usize) -> Self {
        self.side_deck_size = size;
        self
    }

    /// Turn after which the match ends in a draw.
    pub fn turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = turns;
        self
    }

    /// Use a custom card set instead of the starter set. Decks are still
    /// built from the starter ids, so the set must define them.
    pub fn card_set(mut self, cards: CardRegistry, abilities: AbilityRegistry) -> Self {
        self.cards = Some((cards, abilities));
        self
    }

    /// Build the rules and the initial state (in the mulligan phase).
    pub fn build(self, seed: u64) -> (StandardRules, MatchState) {
        let (cards, abilities) = self
            .cards
            .unwrap_or_else(|| (starter_cards(), starter_abilities()));
        let rules = StandardRules::new(cards, abilities, self.turn_limit);
        let mut rng = GameRng::new(seed);
        let mut state = MatchState::new(self.hp);

        for player in PlayerId::all() {
            let ids = MAIN_DECK.iter().copied().cycle().take(self.deck_size);
            let mut deck: Vec<_> = build_zone(&rules, &mut state, player, ids).into_iter().collect();
            rng.shuffle(&mut deck);

            let side_ids = SIDE_DECK.iter().copied().cycle().take(self.side_deck_size);
            let side = build_zone(&rules, &mut state, player, side_ids);

            let hand_size = self.hand_size.min(deck.len());
            let ps = state.player_mut(player);
            ps.hand = deck.drain(..hand_size).collect();
            ps.deck = deck.into_iter().collect();
            ps.side_deck = side;
        }

        (rules, state)
    }

    /// Build a ready-to-play local match.
    pub fn build_local(self, seed: u64) -> LocalMatch {
        let (rules, state) = self.build(seed);
        LocalMatch::new(Arc::new(rules), state)
    }
}
