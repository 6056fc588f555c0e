//! Formatting utilities for terminal output

/// Arrange words into rows of `per_row` columns
///
/// Returns one string per display row, words separated by two spaces.
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> Vec<String> {
    words
        .chunks(per_row.max(1))
        .map(|chunk| chunk.join("  "))
        .collect()
}
