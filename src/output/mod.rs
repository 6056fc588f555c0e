//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::print_hints_result;
