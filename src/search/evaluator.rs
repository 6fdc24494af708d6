//! Static evaluation of match states.

use serde::{Deserialize, Serialize};

use crate::core::{MatchState, PlayerId, PlayerState};
use crate::rules::GameResult;

/// Score of a won match. Dominates every non-terminal score.
pub const WIN_SCORE: f64 = 1_000_000.0;

/// Scores a state from one player's perspective. Higher is better.
///
/// Implementations must be deterministic.
pub trait Evaluator: Send + Sync {
    fn score(&self, state: &MatchState, player: PlayerId) -> f64;
}

/// Weights of the board evaluator terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub hp: f64,
    pub board_attack: f64,
    pub board_hp: f64,
    /// Hand + board + deck.
    pub card_count: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            hp: 10.0,
            board_attack: 6.0,
            board_hp: 4.0,
            card_count: 2.0,
        }
    }
}

/// Material evaluator: own hp, board and cards minus the opponent's.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardEvaluator {
    weights: EvalWeights,
}

impl BoardEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    fn side(&self, ps: &PlayerState) -> f64 {
        let w = &self.weights;
        w.hp * f64::from(ps.hp.max(0))
            + w.board_attack * f64::from(ps.board_attack())
            + w.board_hp * f64::from(ps.board_hp())
            + w.card_count * ps.card_count() as f64
    }
}

impl Evaluator for BoardEvaluator {
    fn score(&self, state: &MatchState, player: PlayerId) -> f64 {
        match state.result {
            Some(GameResult::Winner(p)) if p == player => WIN_SCORE,
            Some(GameResult::Winner(_)) => -WIN_SCORE,
            Some(GameResult::Draw) => 0.0,
            None => self.side(state.player(player)) - self.side(state.opponent(player)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardData, CardId, CardType, Slot};

    fn add_board_card(state: &mut MatchState, owner: PlayerId, attack: i32, hp: i32) {
        let data = CardData::new(CardId::new(1), "Test", CardType::Character).with_stats(attack, hp);
        let mut card = Card::from_data(state.alloc_uid(), &data, owner);
        card.slot = state.player(owner).free_slot().unwrap_or(Slot::new(1));
        state.player_mut(owner).board.push_back(card);
    }

    #[test]
    fn test_symmetric_state_scores_zero() {
        let state = MatchState::new(30);
        let eval = BoardEvaluator::default();
        assert_eq!(eval.score(&state, PlayerId::new(0)), 0.0);
        assert_eq!(eval.score(&state, PlayerId::new(1)), 0.0);
    }

    #[test]
    fn test_monotonic_in_own_terms() {
        let eval = BoardEvaluator::default();
        let p0 = PlayerId::new(0);
        let base = MatchState::new(30);
        let base_score = eval.score(&base, p0);

        let mut hurt = base.clone();
        hurt.player_mut(p0.opponent()).hp -= 5;
        assert!(eval.score(&hurt, p0) > base_score);

        let mut board = base.clone();
        add_board_card(&mut board, p0, 2, 2);
        let with_card = eval.score(&board, p0);
        assert!(with_card > base_score);

        add_board_card(&mut board, p0, 0, 1);
        assert!(eval.score(&board, p0) > with_card);
    }

    #[test]
    fn test_terminal_dominates() {
        let eval = BoardEvaluator::default();
        let p0 = PlayerId::new(0);
        let mut state = MatchState::new(30);
        for _ in 0..5 {
            add_board_card(&mut state, p0.opponent(), 9, 9);
        }
        state.result = Some(GameResult::Winner(p0));

        assert_eq!(eval.score(&state, p0), WIN_SCORE);
        assert_eq!(eval.score(&state, p0.opponent()), -WIN_SCORE);

        state.result = Some(GameResult::Draw);
        assert_eq!(eval.score(&state, p0), 0.0);
    }

    #[test]
    fn test_weights_serialization() {
        let weights = EvalWeights {
            hp: 1.0,
            ..EvalWeights::default()
        };
        let json = serde_json::to_string(&weights).unwrap();
        let back: EvalWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, back);
    }
}
