//! Board tile observations
//!
//! An Observation is one raw reading from a single board tile: which letter
//! the tile holds, where it sits, and what feedback the tile shows. It is the
//! sole boundary between feedback sources and the filtering core.

use std::fmt;
use std::str::FromStr;

/// Feedback kind shown on a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter not in the solution
    Absent,
}

impl Feedback {
    /// The wire string a feedback source reports for this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for a rule kind outside `correct`/`present`/`absent`
///
/// This is a data error from the feedback source, not a recoverable user
/// condition: it aborts the whole pass rather than skipping the rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRuleKind(pub String);

impl fmt::Display for InvalidRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown rule kind '{}' (expected correct, present, or absent)",
            self.0
        )
    }
}

impl std::error::Error for InvalidRuleKind {}

impl FromStr for Feedback {
    type Err = InvalidRuleKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "correct" => Ok(Self::Correct),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(InvalidRuleKind(other.to_string())),
        }
    }
}

/// One raw reading from a single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    letter: u8,
    position: usize,
    kind: Feedback,
}

/// Error type for malformed observations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationError {
    InvalidLetter(String),
    PositionOutOfRange { position: usize, width: usize },
}

impl fmt::Display for ObservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(s) => {
                write!(f, "Tile letter must be a single ASCII letter, got '{s}'")
            }
            Self::PositionOutOfRange { position, width } => {
                write!(f, "Tile position {position} is outside the board width {width}")
            }
        }
    }
}

impl std::error::Error for ObservationError {}

impl Observation {
    /// Create a new Observation from a raw tile reading
    ///
    /// The letter is normalized to uppercase. Validation fails fast rather
    /// than coercing: a malformed letter or position would corrupt the rule
    /// set downstream.
    ///
    /// # Errors
    /// Returns `ObservationError` if:
    /// - `letter` is empty, longer than one character, or not an ASCII letter
    /// - `position` is not within `[0, board_width)`
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Feedback, Observation};
    ///
    /// let obs = Observation::new("a", 0, Feedback::Correct, 5).unwrap();
    /// assert_eq!(obs.letter(), b'A');
    ///
    /// assert!(Observation::new("ab", 0, Feedback::Correct, 5).is_err());
    /// assert!(Observation::new("a", 5, Feedback::Correct, 5).is_err());
    /// ```
    pub fn new(
        letter: &str,
        position: usize,
        kind: Feedback,
        board_width: usize,
    ) -> Result<Self, ObservationError> {
        let letter = match letter.as_bytes() {
            [b] if b.is_ascii_alphabetic() => b.to_ascii_uppercase(),
            _ => return Err(ObservationError::InvalidLetter(letter.to_string())),
        };

        if position >= board_width {
            return Err(ObservationError::PositionOutOfRange {
                position,
                width: board_width,
            });
        }

        Ok(Self {
            letter,
            position,
            kind,
        })
    }

    /// The observed letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    /// Zero-based tile position within the row
    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// The feedback kind shown on the tile
    #[inline]
    #[must_use]
    pub const fn kind(self) -> Feedback {
        self.kind
    }
}

impl fmt::Display for Observation {
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
