//! Hint filtering command
//!
//! Ties the pipeline together: raw observations are consolidated into one
//! rule per letter, then the dictionary is narrowed to the words consistent
//! with every rule.

use crate::core::{Observation, Word};
use crate::filter::filter_words;
use crate::rules::consolidate;

/// Result of a filtering pass
pub struct HintsResult {
    /// Surviving words in dictionary order
    pub words: Vec<String>,
    /// Size of the dictionary that was scanned
    pub scanned: usize,
}

impl HintsResult {
    /// Number of surviving words
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Filter a dictionary down to the words consistent with the board
///
/// With no observations every word survives; contradictory feedback can
/// legitimately leave nothing.
#[must_use]
pub fn find_hints(dictionary: &[Word], observations: Vec<Observation>) -> HintsResult {
    let rules = consolidate(observations);
    log::debug!(
        "filtering {} words against {} rules",
        dictionary.len(),
        rules.len()
    );

    let survivors = filter_words(dictionary, &rules);

    HintsResult {
        words: survivors.iter().map(|word| word.text().to_string()).collect(),
        scanned: dictionary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::wordlists::words_from_slice;

    fn obs(letter: &str, position: usize, kind: Feedback) -> Observation {
        Observation::new(letter, position, kind, 5).unwrap()
    }

    #[test]
    fn no_observations_keeps_whole_dictionary() {
        let dictionary = words_from_slice(&["apple", "angle", "aisle"], 5);
        let result = find_hints(&dictionary, Vec::new());

        assert_eq!(result.count(), 3);
        assert_eq!(result.scanned, 3);
        assert_eq!(result.words, vec!["APPLE", "ANGLE", "AISLE"]);
    }

    #[test]
    fn survivors_keep_dictionary_order() {
        let dictionary = words_from_slice(&["slate", "crane", "trace", "grate"], 5);
        let result = find_hints(
            &dictionary,
            vec![obs("R", 1, Feedback::Correct), obs("S", 0, Feedback::Absent)],
        );

        assert_eq!(result.words, vec!["CRANE", "TRACE", "GRATE"]);
        assert_eq!(result.count(), 3);
        assert_eq!(result.scanned, 4);
    }

    #[test]
    fn contradictory_board_can_leave_nothing() {
        // A0 correct, N1 present, K3 absent: ANGLE and ANKLE have N at the
        // forbidden position, APPLE and AISLE contain no N.
        let dictionary = words_from_slice(&["APPLE", "ANGLE", "AISLE", "ANKLE"], 5);
        let result = find_hints(
            &dictionary,
            vec![
                obs("A", 0, Feedback::Correct),
                obs("N", 1, Feedback::Present),
                obs("K", 3, Feedback::Absent),
            ],
        );

        assert_eq!(result.count(), 0);
        assert!(result.words.is_empty());
        assert_eq!(result.scanned, 4);
    }

    #[test]
    fn duplicate_letter_feedback_does_not_over_eliminate() {
        // ERASE guessed against a board whose answer has one E: the second E
        // tile reads absent, but the first reads present. Words with an E
        // must survive.
        let dictionary = words_from_slice(&["model", "crumb", "shine"], 5);
        let result = find_hints(
            &dictionary,
            vec![obs("E", 0, Feedback::Present), obs("E", 4, Feedback::Absent)],
        );

        assert_eq!(result.words, vec!["MODEL", "SHINE"]);
    }
}
