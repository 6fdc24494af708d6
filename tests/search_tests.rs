//! Search integration tests using the standard game.

use std::sync::Arc;

use tcg_ai::cards::{CardId, CardUid, Slot};
use tcg_ai::core::{Action, GamePhase, MatchState, PlayerId};
use tcg_ai::games::standard::{MatchBuilder, StandardRules};
use tcg_ai::rules::{ActionCatalog, RulesEngine};
use tcg_ai::search::{BoardEvaluator, CancelToken, SearchConfig, SearchEngine};
use tcg_ai::AiError;

fn main_phase(seed: u64) -> (Arc<StandardRules>, MatchState) {
    let (rules, mut state) = MatchBuilder::new().side_deck_size(0).build(seed);
    for p in PlayerId::all() {
        rules.mulligan(&mut state, p, &[]);
    }
    assert_eq!(state.phase, GamePhase::Main);
    (Arc::new(rules), state)
}

fn engine(rules: &Arc<StandardRules>, config: SearchConfig) -> SearchEngine<StandardRules, BoardEvaluator> {
    SearchEngine::new(Arc::clone(rules), BoardEvaluator::default(), config)
}

fn put_on_board(rules: &StandardRules, state: &mut MatchState, owner: PlayerId, id: u32, slot: u8) -> CardUid {
    let mut card = rules.instantiate(state, CardId::new(id), owner).unwrap();
    card.slot = Slot::new(slot);
    let uid = card.uid;
    state.player_mut(owner).board.push_back(card);
    uid
}

// =============================================================================
// Basic Search Tests
// =============================================================================

#[test]
fn test_search_returns_legal_action() {
    let (rules, state) = main_phase(42);
    let p0 = PlayerId::new(0);

    for level in [1, 5, 10] {
        let mut search = engine(&rules, SearchConfig::from_level(level).with_node_budget(3_000));
        let action = search.search(&state, p0).unwrap();

        let action = action.expect("player to move has actions");
        assert!(rules.is_legal(&state, p0, &action), "level {} chose {:?}", level, action);
    }
}

#[test]
fn test_no_legal_actions_returns_none() {
    let (rules, mut state) = main_phase(1);
    let mut search = engine(&rules, SearchConfig::from_level(3));

    // Not this player's turn.
    assert!(search.search(&state, PlayerId::new(1)).unwrap().is_none());

    // Match already decided.
    rules.end_game(&mut state, tcg_ai::GameResult::Draw);
    assert!(rules.legal_actions(&state, PlayerId::new(0)).is_empty());
    assert!(search.search(&state, PlayerId::new(0)).unwrap().is_none());
}

#[test]
fn test_search_does_not_touch_input_state() {
    let (rules, state) = main_phase(7);
    let before = state.clone();

    let mut search = engine(&rules, SearchConfig::from_level(4));
    search.search(&state, PlayerId::new(0)).unwrap();

    assert_eq!(state, before);
}

// =============================================================================
// Tactics
// =============================================================================

#[test]
fn test_prefers_immediately_winning_attack() {
    let (rules, mut state) = main_phase(3);
    let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
    let knight = put_on_board(&rules, &mut state, p0, 3, 2);
    put_on_board(&rules, &mut state, p1, 1, 1);
    state.player_mut(p0).hand.clear();
    state.player_mut(p1).hp = 3;

    let mut search = engine(&rules, SearchConfig::from_level(6));
    let action = search.search(&state, p0).unwrap();

    assert_eq!(action, Some(Action::AttackPlayer { card: knight, target_player: p1 }));
    assert_eq!(search.stats().depth_completed, 1);
}

#[test]
fn test_finds_lethal_in_two_actions() {
    let (rules, mut state) = main_phase(4);
    let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
    let squire = put_on_board(&rules, &mut state, p0, 1, 1);
    let knight = put_on_board(&rules, &mut state, p0, 3, 2);
    state.player_mut(p0).hand.clear();
    state.player_mut(p1).hp = 4;

    let mut search = engine(&rules, SearchConfig::from_level(4));
    let action = search.search(&state, p0).unwrap().unwrap();

    let attackers = [squire, knight];
    assert!(
        matches!(action, Action::AttackPlayer { card, .. } if attackers.contains(&card)),
        "expected an attack on the player, got {:?}",
        action
    );
    assert!(search.node_path().contains("attacks Player 1"));
}

// =============================================================================
// Determinism and Limits
// =============================================================================

#[test]
fn test_search_is_deterministic() {
    let (rules, state) = main_phase(99);
    let config = SearchConfig::from_level(5);

    let mut first = engine(&rules, config.clone());
    let mut second = engine(&rules, config);

    let a = first.search(&state, PlayerId::new(0)).unwrap();
    let b = second.search(&state, PlayerId::new(0)).unwrap();

    assert_eq!(a, b);
    assert_eq!(first.node_path(), second.node_path());
    assert_eq!(first.stats().nodes_visited, second.stats().nodes_visited);
}

#[test]
fn test_ties_go_to_first_action() {
    let (rules, state) = main_phase(5);
    let p0 = PlayerId::new(0);

    // At depth 1 with a flat evaluator every action ties.
    #[derive(Clone)]
    struct Flat;
    impl tcg_ai::search::Evaluator for Flat {
        fn score(&self, _: &MatchState, _: PlayerId) -> f64 {
            0.0
        }
    }

    let config = SearchConfig::from_level(1).with_max_depth(1).with_breadth(100);
    let mut search = SearchEngine::new(Arc::clone(&rules), Flat, config);
    let action = search.search(&state, p0).unwrap();

    assert_eq!(action.as_ref(), rules.legal_actions(&state, p0).first());
}

#[test]
fn test_node_budget_caps_work() {
    let (rules, state) = main_phase(6);
    let config = SearchConfig::from_level(10).with_node_budget(500);
    let mut search = engine(&rules, config);

    search.search(&state, PlayerId::new(0)).unwrap();
    let stats = search.stats();
    assert!(stats.depth_completed >= 1);
    assert!(stats.depth_completed < 7);
}

#[test]
fn test_cancelled_before_start() {
    let (rules, state) = main_phase(8);
    let cancel = CancelToken::new();
    let mut search = engine(&rules, SearchConfig::from_level(5)).with_cancel(cancel.clone());

    cancel.cancel();
    assert!(matches!(search.search(&state, PlayerId::new(0)), Err(AiError::Cancelled)));
    assert!(search.node_path().is_empty());
}
