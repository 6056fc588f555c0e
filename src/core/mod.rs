//! Core domain types
//!
//! The types every other module speaks in: candidate words and board tile
//! observations.

mod observation;
mod word;

pub use observation::{Feedback, InvalidRuleKind, Observation, ObservationError};
pub use word::{Word, WordError};
