//! Game implementations.

pub mod standard;
