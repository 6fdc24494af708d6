//! Card system: definitions, abilities, instances, and registries.
//!
//! ## Key Types
//!
//! - `CardId` / `CardData`: printed card definitions
//! - `AbilityId` / `AbilityData`: ability definitions (trigger, target, effect)
//! - `CardUid` / `Card`: a card instance in a match, with mutable stats
//! - `Slot`: board position
//! - `CardRegistry` / `AbilityRegistry`: definition lookup

pub mod ability;
pub mod definition;
pub mod instance;
pub mod registry;

pub use ability::{AbilityData, AbilityId, AbilityTarget, AbilityTrigger, Effect};
pub use definition::{CardData, CardId, CardType};
pub use instance::{Card, CardUid, Slot, BOARD_SLOTS};
pub use registry::{AbilityRegistry, CardRegistry};
