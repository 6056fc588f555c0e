//! Word filtering against a consolidated rule set
//!
//! Pure, order-preserving evaluation: a word survives iff it satisfies every
//! rule, and survivors keep their dictionary order.

use crate::core::{Feedback, Word};
use crate::rules::{Rule, RuleSet};

/// Decide whether a single word is consistent with one rule
///
/// - `correct`: the word holds the rule's letter at the rule's position.
/// - `present`: the word contains the letter somewhere, and the rule's
///   position does not hold it.
/// - `absent`: the word does not contain the letter anywhere.
///
/// A rule position beyond the word's length can only arise when a dictionary
/// source skipped length normalization; `letter_at` returns `None` there, so
/// a `correct` rule cannot match and a `present` rule's positional exclusion
/// is vacuously satisfied.
#[must_use]
pub fn satisfies(word: &Word, rule: &Rule) -> bool {
    match rule.kind() {
        Feedback::Correct => word.letter_at(rule.position()) == Some(rule.letter()),
        Feedback::Present => {
            word.has_letter(rule.letter()) && word.letter_at(rule.position()) != Some(rule.letter())
        }
        Feedback::Absent => !word.has_letter(rule.letter()),
    }
}

/// Retain the words consistent with every rule in the set
///
/// Returns the surviving subsequence in input order. An empty rule set
/// retains everything.
///
/// # Examples
/// ```
/// use wordle_hints::core::{Feedback, Observation, Word};
/// use wordle_hints::filter::filter_words;
/// use wordle_hints::rules::consolidate;
///
/// let words = vec![Word::new("ANGLE").unwrap(), Word::new("AMBLE").unwrap()];
/// let rules = consolidate(vec![
///     Observation::new("N", 1, Feedback::Correct, 5).unwrap(),
/// ]);
///
/// let survivors = filter_words(&words, &rules);
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "ANGLE");
/// ```
#[must_use]
pub fn filter_words<'a>(words: &'a [Word], rules: &RuleSet) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|word| rules.rules().all(|rule| satisfies(word, rule)))
        .collect()
}
