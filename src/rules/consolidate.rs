//! Observation folding and the per-letter rule map
//!
//! A board yields one observation per occupied tile, so a letter that was
//! guessed more than once (or appears twice in one guess) shows up in several
//! observations, possibly with disagreeing feedback. Filtering wants exactly
//! one rule per letter; the fold below decides which reading survives.

use crate::core::{Feedback, Observation};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// A canonical constraint on one letter
///
/// Same shape as an [`Observation`], but a `RuleSet` holds at most one Rule
/// per distinct letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    letter: u8,
    position: usize,
    kind: Feedback,
}

impl Rule {
    /// The constrained letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    /// The board position the rule refers to
    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// The feedback kind this rule enforces
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Feedback {
        self.kind
    }
}

impl From<Observation> for Rule {
    fn from(obs: Observation) -> Self {
        Self {
            letter: obs.letter(),
            position: obs.position(),
            kind: obs.kind(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} {}",
            char::from(self.letter),
            self.position,
            self.kind
        )
    }
}

/// Consolidated rules, at most one per distinct letter
///
/// Iteration order over [`RuleSet::rules`] is unspecified; callers must not
/// depend on it.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    by_letter: FxHashMap<u8, Rule>,
}

impl RuleSet {
    /// Number of distinct constrained letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_letter.len()
    }

    /// True if no letter is constrained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_letter.is_empty()
    }

    /// Look up the canonical rule for a letter, if any
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&Rule> {
        self.by_letter.get(&letter)
    }

    /// Iterate over the canonical rules in unspecified order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.by_letter.values()
    }
}

/// Fold a sequence of observations into one canonical rule per letter
///
/// Observations are processed in the order given. The first reading for a
/// letter is stored as-is; later readings for the same letter go through the
/// precedence policy below. An empty input yields an empty rule set, which
/// filters nothing.
///
/// # Examples
/// ```
/// use wordle_hints::core::{Feedback, Observation};
/// use wordle_hints::rules::consolidate;
///
/// let observations = vec![
///     Observation::new("A", 0, Feedback::Absent, 5).unwrap(),
///     Observation::new("A", 3, Feedback::Present, 5).unwrap(),
/// ];
/// let rules = consolidate(observations);
///
/// // The present reading outranks absent, so one rule survives: A@3 present
/// assert_eq!(rules.len(), 1);
/// assert_eq!(rules.get(b'A').unwrap().kind(), Feedback::Present);
/// ```
pub fn consolidate<I>(observations: I) -> RuleSet
where
    I: IntoIterator<Item = Observation>,
{
    let mut by_letter: FxHashMap<u8, Rule> = FxHashMap::default();

    for observation in observations {
        let incoming = Rule::from(observation);
        match by_letter.entry(incoming.letter()) {
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
            Entry::Occupied(mut slot) => {
                let winner = resolve(*slot.get(), incoming);
                if winner != *slot.get() {
                    log::debug!("rule {} superseded by {winner}", slot.get());
                }
                slot.insert(winner);
            }
        }
    }

    if log::log_enabled!(log::Level::Debug) {
        for rule in by_letter.values() {
            log::debug!("consolidated rule: {rule}");
        }
    }

    RuleSet { by_letter }
}

/// Precedence policy for two rules about the same letter
///
/// A board marks every occurrence of a guessed letter, so a letter occurring
/// twice in one guess can read `absent` on one tile and `correct`/`present`
/// on another. The non-absent reading carries strictly more information and
/// must win regardless of order; between two non-absent readings the later
/// one wins.
fn resolve(existing: Rule, incoming: Rule) -> Rule {
    if incoming.kind() == Feedback::Absent && existing.kind() != Feedback::Absent {
        existing
    } else {
        incoming
    }
}
