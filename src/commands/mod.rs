//! Command implementations

pub mod hints;

pub use hints::{HintsResult, find_hints};
