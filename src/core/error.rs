//! Error types for the decision core.
//!
//! Failures never reach the match: the driver turns every one of these into
//! "do nothing" or "end the turn".

use thiserror::Error;

/// Errors surfaced by the search and its worker.
#[derive(Debug, Error)]
pub enum AiError {
    /// The search was stopped before it finished; its result is discarded.
    #[error("search cancelled")]
    Cancelled,

    /// The worker thread went away without reporting a result.
    #[error("search worker disconnected before reporting")]
    WorkerDisconnected,

    #[error("failed to spawn search worker: {0}")]
    WorkerSpawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(AiError::Cancelled.to_string(), "search cancelled");
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no threads");
        assert_eq!(
            AiError::from(io).to_string(),
            "failed to spawn search worker: no threads"
        );
    }
}
