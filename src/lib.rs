//! Wordle Hints
//!
//! A constraint-based word-list filter: given a dictionary of fixed-length
//! words and per-tile board feedback (correct / present / absent), computes
//! the dictionary words consistent with all of it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::{Feedback, Observation};
//! use wordle_hints::filter::filter_words;
//! use wordle_hints::rules::consolidate;
//! use wordle_hints::wordlists::words_from_slice;
//!
//! let dictionary = words_from_slice(&["apple", "angle", "aisle"], 5);
//!
//! // One rule per distinct letter, folded from raw tile readings
//! let rules = consolidate(vec![
//!     Observation::new("A", 0, Feedback::Correct, 5).unwrap(),
//!     Observation::new("P", 2, Feedback::Absent, 5).unwrap(),
//! ]);
//!
//! let survivors = filter_words(&dictionary, &rules);
//! assert_eq!(survivors.len(), 2); // APPLE is out
//! ```

// Core domain types
pub mod core;

// Rule consolidation
pub mod rules;

// Word filtering
pub mod filter;

// Board feedback parsing
pub mod board;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
