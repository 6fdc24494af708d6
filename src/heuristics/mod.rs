//! One-shot decision heuristics that don't need a search.

pub mod side_deck;

pub use side_deck::{
    Jitter, NoJitter, ScoredCard, SideDeckSelector, SideDeckWeights, UniformJitter, JITTER_RANGE,
};
