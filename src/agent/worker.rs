//! Background search worker.
//!
//! One search runs on its own thread with a private copy of the state. The
//! result comes back through a oneshot channel that the driver polls with
//! `try_recv`, so no async runtime is needed.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::debug;

use crate::core::{Action, AiError, MatchState, PlayerId, Result};
use crate::rules::RulesEngine;
use crate::search::{CancelToken, Evaluator, SearchConfig, SearchEngine, SearchStats};

/// What a finished search hands back.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub action: Option<Action>,
    pub node_path: String,
    pub stats: SearchStats,
}

/// Handle to a running search.
#[derive(Debug)]
pub struct SearchWorker {
    receiver: oneshot::Receiver<Result<SearchReport>>,
    cancel: CancelToken,
    thread: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Start searching `state` for `player` on a new thread.
    pub fn spawn<R, V>(
        rules: Arc<R>,
        evaluator: V,
        config: SearchConfig,
        state: MatchState,
        player: PlayerId,
    ) -> Result<Self>
    where
        R: RulesEngine + Send + Sync + 'static,
        V: Evaluator + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let cancel = CancelToken::new();
        let token = cancel.clone();

        let thread = thread::Builder::new()
            .name(format!("ai-search-{}", player.0))
            .spawn(move || {
                let mut engine = SearchEngine::new(rules, evaluator, config).with_cancel(token);
                let report = engine.search(&state, player).map(|action| SearchReport {
                    action,
                    node_path: engine.node_path().to_string(),
                    stats: engine.stats().clone(),
                });
                // The receiver is gone if the driver dropped the worker.
                let _ = sender.send(report);
            })?;

        Ok(Self {
            receiver,
            cancel,
            thread: Some(thread),
        })
    }

    /// Whether the search is still running.
    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Take the result if the search has finished.
    ///
    /// `None` while running; afterwards the report, `Cancelled`, or
    /// `WorkerDisconnected` if the thread died without reporting.
    pub fn try_take(&mut self) -> Option<Result<SearchReport>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.join();
                Some(Err(AiError::WorkerDisconnected))
            }
        }
    }

    /// Ask the search to stop. Its result will be discarded.
    pub fn stop(&self) {
        debug!("stopping search worker");
        self.cancel.cancel();
    }

    fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Detach rather than block the caller; the thread exits at its next node.
        self.cancel.cancel();
    }
}
