//! AI player: gameplay contract, executor, background search and the
//! tick-driven driver.
//!
//! ## Key Types
//!
//! - `Gameplay`: queries and commands the AI uses to play a match
//! - `ActionExecutor`: maps an `Action` to gameplay commands
//! - `SearchWorker`: a search running on its own thread
//! - `AiPlayer`: the per-player state machine, advanced by `tick`

pub mod config;
pub mod driver;
pub mod executor;
pub mod gameplay;
pub mod worker;

pub use config::DriverConfig;
pub use driver::{AiPlayer, DriverPhase};
pub use executor::{ActionExecutor, Execution};
pub use gameplay::Gameplay;
pub use worker::{SearchReport, SearchWorker};
