//! Display functions for command results

use super::formatters::columns;
use crate::commands::HintsResult;
use colored::Colorize;

const WORDS_PER_ROW: usize = 8;

/// Print the surviving words and their count
///
/// `limit` truncates the word listing for huge result sets; the count line
/// always reflects the full result.
pub fn print_hints_result(result: &HintsResult, limit: Option<usize>) {
    println!("\n{}", "─".repeat(60).cyan());

    let shown = limit.map_or(&result.words[..], |n| {
        &result.words[..n.min(result.words.len())]
    });

    for row in columns(shown, WORDS_PER_ROW) {
        println!("  {row}");
    }

    let hidden = result.words.len() - shown.len();
    if hidden > 0 {
        println!("  {}", format!("… and {hidden} more").bright_black());
    }

    println!("{}", "─".repeat(60).cyan());
    println!(
        "{} possibilities (scanned {} words)",
        result.count().to_string().bright_yellow().bold(),
        result.scanned
    );

    if result.count() == 0 {
        println!(
            "{}",
            "No words match — the board feedback may contradict itself.".red()
        );
    }
}
