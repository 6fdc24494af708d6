//! Alpha-beta game-tree search.
//!
//! Iterative deepening from depth 1 to `max_depth`; the answer of the
//! deepest completed iteration wins. Nodes where the searching player acts
//! maximize, all others minimize. Children are ranked by static evaluation
//! and cut to `max_breadth`; at the root the survivors keep enumeration
//! order so equal scores resolve to the first legal action.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::cancel::CancelToken;
use super::config::SearchConfig;
use super::evaluator::{Evaluator, WIN_SCORE};
use super::node::{NodeId, SearchNode};
use super::stats::SearchStats;
use super::tree::SearchTree;
use crate::core::{Action, AiError, MatchState, PlayerId, Result};
use crate::rules::{GameResult, RulesEngine};

/// Why an iteration stopped early.
enum Interrupt {
    Budget,
    Cancelled,
}

/// Main search context.
///
/// Generic over the rules engine and evaluator. Owns the search tree,
/// which is cleared after every decision.
pub struct SearchEngine<R, V> {
    rules: Arc<R>,
    evaluator: V,
    config: SearchConfig,
    tree: SearchTree,
    stats: SearchStats,
    cancel: CancelToken,
    node_path: String,
}

impl<R: RulesEngine, V: Evaluator> SearchEngine<R, V> {
    pub fn new(rules: Arc<R>, evaluator: V, config: SearchConfig) -> Self {
        Self {
            rules,
            evaluator,
            config,
            tree: SearchTree::new(),
            stats: SearchStats::default(),
            cancel: CancelToken::new(),
            node_path: String::new(),
        }
    }

    /// Share a stop flag with the caller.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Principal variation of the last search.
    pub fn node_path(&self) -> &str {
        &self.node_path
    }

    /// Choose an action for `player`.
    ///
    /// Returns `Ok(None)` when `player` has no legal action, and
    /// `Err(AiError::Cancelled)` when the cancel token was set.
    pub fn search(&mut self, root: &MatchState, player: PlayerId) -> Result<Option<Action>> {
        let start = Instant::now();
        self.stats.reset();
        self.node_path.clear();

        let outcome = self.deepen(root, player);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.tree.clear();

        match &outcome {
            Ok(Some(action)) => debug!(
                level = self.config.level,
                depth = self.stats.depth_completed,
                nodes = self.stats.nodes_visited,
                cutoffs = self.stats.cutoffs,
                score = self.stats.best_score,
                elapsed_us = self.stats.time_us,
                action = %action.describe(root),
                path = %self.node_path,
                "search finished"
            ),
            Ok(None) => debug!(%player, "no legal action"),
            Err(_) => debug!(nodes = self.stats.nodes_visited, "search cancelled"),
        }
        outcome
    }

    fn deepen(&mut self, root: &MatchState, player: PlayerId) -> Result<Option<Action>> {
        if self.rules.legal_actions(root, player).is_empty() {
            return Ok(None);
        }

        let mut best = None;
        for depth in 1..=self.config.max_depth {
            let root_id = self.tree.reset(root.clone(), player);
            let enforce_budget = depth > 1;

            match self.alpha_beta(root_id, depth, f64::NEG_INFINITY, f64::INFINITY, player, enforce_budget) {
                Ok(score) => {
                    let chosen = self.tree.get(root_id).best;
                    if chosen.is_none() {
                        break;
                    }
                    best = self.tree.get(chosen).action;
                    self.stats.depth_completed = depth;
                    self.stats.best_score = score;
                    self.node_path = self.tree.node_path();
                    trace!(depth, score, path = %self.node_path, "iteration complete");
                }
                Err(Interrupt::Budget) => break,
                Err(Interrupt::Cancelled) => return Err(AiError::Cancelled),
            }

            if self.stats.nodes_visited >= self.config.node_budget || score_is_decisive(self.stats.best_score) {
                break;
            }
        }
        Ok(best)
    }

    fn alpha_beta(
        &mut self,
        id: NodeId,
        depth_left: u16,
        mut alpha: f64,
        mut beta: f64,
        player: PlayerId,
        enforce_budget: bool,
    ) -> std::result::Result<f64, Interrupt> {
        if self.cancel.is_cancelled() {
            return Err(Interrupt::Cancelled);
        }
        if enforce_budget && self.stats.nodes_visited >= self.config.node_budget {
            return Err(Interrupt::Budget);
        }
        self.stats.nodes_visited += 1;

        let node = self.tree.get(id);
        if let Some(result) = self.rules.result(&node.state) {
            return Ok(terminal_score(result, player, node.depth));
        }
        if depth_left == 0 {
            return Ok(self.evaluator.score(&node.state, player));
        }

        let maximizing = node.parent.is_none() || node.state.acting_player() == player;
        let children = self.expand(id, player);
        if children.is_empty() {
            return Ok(self.evaluator.score(&self.tree.get(id).state, player));
        }

        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        let mut best_child = NodeId::NONE;
        for child in children {
            let value = self.alpha_beta(child, depth_left - 1, alpha, beta, player, enforce_budget)?;
            if maximizing {
                if value > best {
                    best = value;
                    best_child = child;
                }
                alpha = alpha.max(best);
            } else {
                if value < best {
                    best = value;
                    best_child = child;
                }
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        let node = self.tree.get_mut(id);
        node.score = best;
        node.best = best_child;
        Ok(best)
    }

    /// Generate, rank and allocate the children of `id`.
    fn expand(&mut self, id: NodeId, player: PlayerId) -> SmallVec<[NodeId; 8]> {
        let parent = self.tree.get(id);
        let is_root = parent.parent.is_none();
        let depth = parent.depth + 1;
        let actor = if is_root { player } else { parent.state.acting_player() };
        let state = parent.state.clone();
        let maximizing = actor == player;

        let mut scored: Vec<(usize, Action, MatchState, f64)> = self
            .rules
            .legal_actions(&state, actor)
            .into_iter()
            .enumerate()
            .map(|(index, action)| {
                let mut next = state.clone();
                self.rules.apply_action(&mut next, actor, &action);
                let value = self.evaluator.score(&next, player);
                (index, action, next, value)
            })
            .collect();

        if !is_root || scored.len() > self.config.max_breadth {
            scored.sort_by(|a, b| {
                let order = a.3.partial_cmp(&b.3).unwrap_or(Ordering::Equal);
                if maximizing {
                    order.reverse()
                } else {
                    order
                }
            });
            scored.truncate(self.config.max_breadth);
            if is_root {
                scored.sort_by_key(|entry| entry.0);
            }
        }

        let children: SmallVec<[NodeId; 8]> = scored
            .into_iter()
            .map(|(_, action, next, _)| self.tree.alloc(SearchNode::new(id, next, action, actor, depth)))
            .collect();
        self.tree.get_mut(id).children = children.clone();
        children
    }
}

/// Terminal score; faster wins and slower losses score higher.
fn terminal_score(result: GameResult, player: PlayerId, ply: u16) -> f64 {
    match result {
        GameResult::Winner(p) if p == player => WIN_SCORE - f64::from(ply),
        GameResult::Winner(_) => -WIN_SCORE + f64::from(ply),
        GameResult::Draw => 0.0,
    }
}

fn score_is_decisive(score: f64) -> bool {
    score.abs() >= WIN_SCORE / 2.0
}
