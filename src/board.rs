//! Textual board feedback parsing
//!
//! The feedback source is a swappable adapter whose sole output is a sequence
//! of [`Observation`]s. This one parses textual tile descriptions; a scraper
//! or any other source would slot in behind the same boundary.
//!
//! Two forms are accepted:
//! - A row: `WORD:marks`, one mark per tile (`c`/`g` correct, `p`/`y`
//!   present, `a`/`-`/`_` absent, emoji squares also work).
//! - A single tile: `LETTER:POSITION:KIND` with the full kind word, e.g.
//!   `A:0:correct`.

use crate::core::{Feedback, InvalidRuleKind, Observation, ObservationError};
use std::fmt;

/// Error type for malformed board descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    MissingSeparator(String),
    RowWidthMismatch {
        spec: String,
        letters: usize,
        marks: usize,
        width: usize,
    },
    InvalidMark(char),
    InvalidPosition(String),
    Observation(ObservationError),
    Kind(InvalidRuleKind),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(spec) => {
                write!(f, "Expected WORD:marks or LETTER:POS:KIND, got '{spec}'")
            }
            Self::RowWidthMismatch {
                spec,
                letters,
                marks,
                width,
            } => write!(
                f,
                "Row '{spec}' has {letters} letters and {marks} marks, board width is {width}"
            ),
            Self::InvalidMark(mark) => {
                write!(f, "Unknown tile mark '{mark}' (use c/g, p/y, or a/-)")
            }
            Self::InvalidPosition(pos) => write!(f, "Tile position '{pos}' is not a number"),
            Self::Observation(err) => write!(f, "{err}"),
            Self::Kind(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Observation(err) => Some(err),
            Self::Kind(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ObservationError> for BoardError {
    fn from(err: ObservationError) -> Self {
        Self::Observation(err)
    }
}

impl From<InvalidRuleKind> for BoardError {
    fn from(err: InvalidRuleKind) -> Self {
        Self::Kind(err)
    }
}

/// Parse one guessed row with per-tile marks into observations
///
/// # Errors
/// Returns `BoardError` if the spec has no `:` separator, if the word or the
/// marks do not match the board width, or if a mark or letter is invalid.
///
/// # Examples
/// ```
/// use wordle_hints::board::parse_row;
/// use wordle_hints::core::Feedback;
///
/// let observations = parse_row("CRANE:c-p-a", 5).unwrap();
/// assert_eq!(observations.len(), 5);
/// assert_eq!(observations[0].kind(), Feedback::Correct);
/// assert_eq!(observations[2].kind(), Feedback::Present);
/// ```
pub fn parse_row(spec: &str, width: usize) -> Result<Vec<Observation>, BoardError> {
    let Some((letters, marks)) = spec.split_once(':') else {
        return Err(BoardError::MissingSeparator(spec.to_string()));
    };

    let letter_count = letters.chars().count();
    let mark_count = marks.chars().count();
    if letter_count != width || mark_count != width {
        return Err(BoardError::RowWidthMismatch {
            spec: spec.to_string(),
            letters: letter_count,
            marks: mark_count,
            width,
        });
    }

    letters
        .chars()
        .zip(marks.chars())
        .enumerate()
        .map(|(position, (letter, mark))| {
            let kind = mark_kind(mark).ok_or(BoardError::InvalidMark(mark))?;
            Observation::new(&letter.to_string(), position, kind, width).map_err(BoardError::from)
        })
        .collect()
}

/// Parse a single `LETTER:POSITION:KIND` tile description
///
/// The kind is the full wire word, so this is where an unknown rule kind
/// surfaces and aborts the pass.
///
/// # Errors
/// Returns `BoardError` on a malformed spec, letter, position, or kind.
pub fn parse_tile(spec: &str, width: usize) -> Result<Observation, BoardError> {
    let mut parts = spec.splitn(3, ':');
    let (Some(letter), Some(position), Some(kind)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(BoardError::MissingSeparator(spec.to_string()));
    };

    let position: usize = position
        .parse()
        .map_err(|_| BoardError::InvalidPosition(position.to_string()))?;
    let kind: Feedback = kind.parse()?;

    Observation::new(letter, position, kind, width).map_err(BoardError::from)
}

/// Parse a whole board: any number of rows plus any number of single tiles
///
/// Observations come out in input order, rows first, so later readings of a
/// letter override earlier ones during consolidation.
///
/// # Errors
/// Returns the first `BoardError` encountered.
pub fn parse_board(
    rows: &[String],
    tiles: &[String],
    width: usize,
) -> Result<Vec<Observation>, BoardError> {
    let mut observations = Vec::new();

    for row in rows {
        observations.extend(parse_row(row, width)?);
    }
    for tile in tiles {
        observations.push(parse_tile(tile, width)?);
    }

    Ok(observations)
}

fn mark_kind(mark: char) -> Option<Feedback> {
    match mark {
        'c' | 'C' | 'g' | 'G' | '🟩' => Some(Feedback::Correct),
        'p' | 'P' | 'y' | 'Y' | '🟨' => Some(Feedback::Present),
        'a' | 'A' | '-' | '_' | '⬜' => Some(Feedback::Absent),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_valid() {
        let observations = parse_row("CRANE:cp-a-", 5).unwrap();

        assert_eq!(observations.len(), 5);
        assert_eq!(observations[0].letter(), b'C');
        assert_eq!(observations[0].position(), 0);
        assert_eq!(observations[0].kind(), Feedback::Correct);
        assert_eq!(observations[1].kind(), Feedback::Present);
        assert_eq!(observations[2].kind(), Feedback::Absent);
        assert_eq!(observations[3].kind(), Feedback::Absent);
        assert_eq!(observations[4].kind(), Feedback::Absent);
    }

    #[test]
    fn parse_row_mark_aliases() {
        let with_letters = parse_row("CRANE:gy-__", 5).unwrap();
        let with_emoji = parse_row("CRANE:🟩🟨⬜⬜⬜", 5).unwrap();
        assert_eq!(with_letters, with_emoji);
    }

    #[test]
    fn parse_row_lowercase_word() {
        let observations = parse_row("crane:ccccc", 5).unwrap();
        assert_eq!(observations[0].letter(), b'C');
        assert_eq!(observations[4].letter(), b'E');
    }

    #[test]
    fn parse_row_missing_separator() {
        assert!(matches!(
            parse_row("CRANE", 5),
            Err(BoardError::MissingSeparator(_))
        ));
    }

    #[test]
    fn parse_row_width_mismatch() {
        // Word too short
        assert!(matches!(
            parse_row("CRAN:ccccc", 5),
            Err(BoardError::RowWidthMismatch { letters: 4, .. })
        ));
        // Marks too long
        assert!(matches!(
            parse_row("CRANE:cccccc", 5),
            Err(BoardError::RowWidthMismatch { marks: 6, .. })
        ));
    }

    #[test]
    fn parse_row_invalid_mark() {
        assert!(matches!(
            parse_row("CRANE:ccxcc", 5),
            Err(BoardError::InvalidMark('x'))
        ));
    }

    #[test]
    fn parse_row_invalid_letter() {
        assert!(matches!(
            parse_row("CR4NE:ccccc", 5),
            Err(BoardError::Observation(ObservationError::InvalidLetter(_)))
        ));
    }

    #[test]
    fn parse_tile_valid() {
        let observation = parse_tile("A:0:correct", 5).unwrap();
        assert_eq!(observation.letter(), b'A');
        assert_eq!(observation.position(), 0);
        assert_eq!(observation.kind(), Feedback::Correct);
    }

    #[test]
    fn parse_tile_unknown_kind_aborts() {
        let err = parse_tile("A:0:maybe", 5).unwrap_err();
        assert_eq!(err, BoardError::Kind(InvalidRuleKind("maybe".to_string())));
    }

    #[test]
    fn parse_tile_bad_position() {
        assert!(matches!(
            parse_tile("A:first:correct", 5),
            Err(BoardError::InvalidPosition(_))
        ));
        assert!(matches!(
            parse_tile("A:7:correct", 5),
            Err(BoardError::Observation(
                ObservationError::PositionOutOfRange { position: 7, width: 5 }
            ))
        ));
    }

    #[test]
    fn parse_tile_missing_parts() {
        assert!(matches!(
            parse_tile("A:0", 5),
            Err(BoardError::MissingSeparator(_))
        ));
    }

    #[test]
    fn parse_board_rows_then_tiles_in_order() {
        let rows = vec!["CRANE:-p---".to_string()];
        let tiles = vec!["R:2:correct".to_string()];

        let observations = parse_board(&rows, &tiles, 5).unwrap();
        assert_eq!(observations.len(), 6);
        // Tiles follow rows, so the tile reading wins consolidation later
        assert_eq!(observations[5].letter(), b'R');
        assert_eq!(observations[5].kind(), Feedback::Correct);
    }

    #[test]
    fn parse_board_empty_inputs() {
        let observations = parse_board(&[], &[], 5).unwrap();
        assert!(observations.is_empty());
    }
}
