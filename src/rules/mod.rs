//! Rule consolidation
//!
//! Reduces raw per-tile observations, which may repeat or contradict each
//! other for the same letter, into one canonical rule per letter.

mod consolidate;

pub use consolidate::{Rule, RuleSet, consolidate};
