//! Dictionary loading
//!
//! The dictionary source supplies candidate words already normalized to the
//! board width; everything that fails normalization is dropped here, before
//! rule evaluation ever sees it.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};
