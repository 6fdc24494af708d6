//! Tick-driven AI player.
//!
//! ```text
//! Idle ──(side-deck phase)──> SideDeckDeciding ──(think delay, pick)──> Idle
//!   │
//!   └──(our turn)──> TurnDeciding: Thinking ──> Searching ──> Settling ──> Idle
//!                         │             │
//!                         └─(turn lost)─┴──> Stopped (acts as Idle next tick)
//! ```
//!
//! The host calls `tick` on a schedule of its choosing and passes the
//! current time, so delays are measured against the host's clock.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::config::DriverConfig;
use super::executor::{ActionExecutor, Execution};
use super::gameplay::Gameplay;
use super::worker::{SearchReport, SearchWorker};
use crate::cards::CardUid;
use crate::core::{AiError, GamePhase, PlayerId};
use crate::heuristics::{SideDeckSelector, UniformJitter};
use crate::rules::RulesEngine;
use crate::search::{BoardEvaluator, Evaluator};

/// Sub-state of a turn decision.
#[derive(Debug)]
enum TurnStep {
    Thinking { ready_at: Instant },
    Searching { worker: SearchWorker },
    Settling { until: Instant },
}

#[derive(Debug)]
enum DriverState {
    Idle,
    SideDeckDeciding { ready_at: Instant },
    TurnDeciding(TurnStep),
    Stopped,
}

/// Observable driver phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverPhase {
    Idle,
    SideDeckDeciding,
    Thinking,
    Searching,
    Settling,
    Stopped,
}

/// A computer-controlled player.
#[derive(Debug)]
pub struct AiPlayer<R, V = BoardEvaluator> {
    player: PlayerId,
    rules: Arc<R>,
    evaluator: V,
    config: DriverConfig,
    selector: SideDeckSelector,
    jitter: UniformJitter,
    executor: ActionExecutor,
    state: DriverState,
    last_report: Option<SearchReport>,
}

impl<R> AiPlayer<R, BoardEvaluator>
where
    R: RulesEngine + Send + Sync + 'static,
{
    pub fn new(player: PlayerId, rules: Arc<R>, config: DriverConfig) -> Self {
        Self::with_evaluator(player, rules, BoardEvaluator::default(), config)
    }
}

impl<R, V> AiPlayer<R, V>
where
    R: RulesEngine + Send + Sync + 'static,
    V: Evaluator + Clone + 'static,
{
    pub fn with_evaluator(player: PlayerId, rules: Arc<R>, evaluator: V, config: DriverConfig) -> Self {
        let jitter = UniformJitter::from_seed(config.seed.wrapping_add(u64::from(player.0)));
        Self {
            player,
            rules,
            evaluator,
            config,
            selector: SideDeckSelector::default(),
            jitter,
            executor: ActionExecutor::new(),
            state: DriverState::Idle,
            last_report: None,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn phase(&self) -> DriverPhase {
        match &self.state {
            DriverState::Idle => DriverPhase::Idle,
            DriverState::SideDeckDeciding { .. } => DriverPhase::SideDeckDeciding,
            DriverState::TurnDeciding(TurnStep::Thinking { .. }) => DriverPhase::Thinking,
            DriverState::TurnDeciding(TurnStep::Searching { .. }) => DriverPhase::Searching,
            DriverState::TurnDeciding(TurnStep::Settling { .. }) => DriverPhase::Settling,
            DriverState::Stopped => DriverPhase::Stopped,
        }
    }

    /// Whether a decision is in flight.
    pub fn is_busy(&self) -> bool {
        !matches!(self.state, DriverState::Idle | DriverState::Stopped)
    }

    /// Report of the last applied search.
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }

    /// Cards to redraw at the mulligan: always none.
    pub fn mulligan_choice(&self) -> Vec<CardUid> {
        Vec::new()
    }

    /// Abandon any decision in flight.
    pub fn stop(&mut self) {
        if let DriverState::TurnDeciding(TurnStep::Searching { worker }) = &self.state {
            worker.stop();
        }
        if self.is_busy() {
            info!(player = %self.player, "decision stopped");
            self.state = DriverState::Stopped;
        }
    }

    /// Advance the state machine.
    pub fn tick<G: Gameplay + ?Sized>(&mut self, game: &mut G, now: Instant) {
        let state = std::mem::replace(&mut self.state, DriverState::Idle);
        self.state = match state {
            DriverState::Idle | DriverState::Stopped => self.start(game, now),
            DriverState::SideDeckDeciding { ready_at } if now < ready_at => {
                DriverState::SideDeckDeciding { ready_at }
            }
            DriverState::SideDeckDeciding { .. } => {
                self.pick_side_card(game);
                DriverState::Idle
            }
            DriverState::TurnDeciding(step) => self.advance_turn(game, step, now),
        };
    }

    fn start<G: Gameplay + ?Sized>(&mut self, game: &mut G, now: Instant) -> DriverState {
        let state = game.match_state();
        if state.is_finished() {
            return DriverState::Idle;
        }

        let me = state.player(self.player);
        if state.phase == GamePhase::SideDeckSelection && !me.side_deck_selected && me.has_side_cards() {
            return DriverState::SideDeckDeciding {
                ready_at: now + self.config.think_delay,
            };
        }

        if game.is_player_turn(self.player) {
            return DriverState::TurnDeciding(TurnStep::Thinking {
                ready_at: now + self.config.think_delay,
            });
        }

        if game.is_mulligan_turn(self.player) {
            debug!(player = %self.player, "keeping opening hand");
            let discarded = self.mulligan_choice();
            game.mulligan(self.player, &discarded);
        }
        DriverState::Idle
    }

    fn pick_side_card<G: Gameplay + ?Sized>(&mut self, game: &mut G) {
        let me = game.player(self.player);
        if me.side_deck_selected || !me.has_side_cards() {
            return;
        }

        let opponent = game.opponent(self.player);
        let pick = self
            .selector
            .select_best(me.side_deck.iter(), me, opponent, &mut self.jitter)
            .map(|best| (best.card.uid, best.card.title.clone(), best.score));

        if let Some((uid, title, score)) = pick {
            info!(player = %self.player, card = %title, score, "side deck pick");
            game.select_side_deck_card(self.player, uid);
        }
    }

    fn advance_turn<G: Gameplay + ?Sized>(&mut self, game: &mut G, step: TurnStep, now: Instant) -> DriverState {
        let deciding = !matches!(step, TurnStep::Settling { .. });
        if deciding && !game.is_player_turn(self.player) {
            if let TurnStep::Searching { worker } = &step {
                worker.stop();
            }
            info!(player = %self.player, "turn ended while deciding, result discarded");
            return DriverState::Stopped;
        }

        match step {
            TurnStep::Thinking { ready_at } if now < ready_at => DriverState::TurnDeciding(TurnStep::Thinking { ready_at }),
            TurnStep::Thinking { .. } => self.spawn_search(game, now),
            TurnStep::Searching { mut worker } => match worker.try_take() {
                None => DriverState::TurnDeciding(TurnStep::Searching { worker }),
                Some(Ok(report)) => self.apply(game, report, now),
                Some(Err(AiError::Cancelled)) => DriverState::Stopped,
                Some(Err(err)) => {
                    warn!(player = %self.player, %err, "search failed, ending turn");
                    self.end_turn(game, now)
                }
            },
            TurnStep::Settling { until } if now < until => DriverState::TurnDeciding(TurnStep::Settling { until }),
            TurnStep::Settling { .. } => DriverState::Idle,
        }
    }

    fn spawn_search<G: Gameplay + ?Sized>(&mut self, game: &mut G, now: Instant) -> DriverState {
        let spawned = SearchWorker::spawn(
            Arc::clone(&self.rules),
            self.evaluator.clone(),
            self.config.search(),
            game.match_state().clone(),
            self.player,
        );
        match spawned {
            Ok(worker) => {
                debug!(player = %self.player, level = self.config.level, "search started");
                DriverState::TurnDeciding(TurnStep::Searching { worker })
            }
            Err(err) => {
                warn!(player = %self.player, %err, "could not start search, ending turn");
                self.end_turn(game, now)
            }
        }
    }

    fn apply<G: Gameplay + ?Sized>(&mut self, game: &mut G, report: SearchReport, now: Instant) -> DriverState {
        let next = match report.action {
            Some(action) => {
                info!(
                    player = %self.player,
                    action = %action.describe(game.match_state()),
                    path = %report.node_path,
                    nodes = report.stats.nodes_visited,
                    depth = report.stats.depth_completed,
                    "executing AI action"
                );
                if self.executor.execute(game, self.player, &action) == Execution::Ignored {
                    debug!(player = %self.player, ?action, "action not applied");
                }
                DriverState::TurnDeciding(TurnStep::Settling {
                    until: now + self.config.settle_delay,
                })
            }
            None => self.end_turn(game, now),
        };
        self.last_report = Some(report);
        next
    }

    fn end_turn<G: Gameplay + ?Sized>(&mut self, game: &mut G, now: Instant) -> DriverState {
        if game.can_play(self.player) {
            debug!(player = %self.player, "no action, ending turn");
            game.end_turn(self.player);
        }
        DriverState::TurnDeciding(TurnStep::Settling {
            until: now + self.config.settle_delay,
        })
    }
}
