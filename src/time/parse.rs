//! Parsing of `HH:MM:SS.mmm` / `HH:MM:SS,mmm` timecodes and of `start --> end` lines.

use log::trace;
use nom::{
    character::complete::{char, digit1},
    combinator::map_res,
    multi::separated_list1,
    IResult, Parser as _,
};
use std::fmt;
use thiserror::Error;

use super::{TimePoint, TimeSpan};
use crate::util::{IResultExt as _, NomError};

/// Separator between the end of a start timestamp and the begin of the end timestamp.
const RANGE_SEPARATOR: &str = " --> ";
/// The separator is searched from this column, the start timestamp is at least `MM:SS.mmm`.
const RANGE_SEPARATOR_MIN_COLUMN: usize = 8;
/// Shortest possible `MM:SS.mmm --> MM:SS.mmm` line.
const RANGE_MIN_LEN: usize = 23;

/// Character separating seconds from milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalMark {
    /// `,` used by `SubRip`.
    Comma,
    /// `.` used by `WebVTT`.
    Dot,
}

impl DecimalMark {
    /// The separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Dot => '.',
        }
    }
}

impl fmt::Display for DecimalMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Error of timestamp parsing.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The timestamp doesn't split in exactly two parts on the decimal mark.
    #[error("Expected exactly one '{mark}' in timestamp '{text}'")]
    DecimalMark {
        /// Expected decimal mark
        mark: DecimalMark,
        /// Rejected timestamp
        text: String,
    },

    /// The integer part has not 2 (`MM:SS`) or 3 (`HH:MM:SS`) fields.
    #[error("Expected 2 or 3 fields separated by ':', found {count} in '{text}'")]
    FieldCount {
        /// Number of fields found
        count: usize,
        /// Rejected timestamp
        text: String,
    },

    /// A field is not made of digits.
    #[error("Non numeric field in timestamp '{text}'")]
    NotNumeric {
        /// Rejected timestamp
        text: String,
        /// Parsing error
        source: NomError,
    },

    /// The line is too short to contain a timestamp range.
    #[error("Line of {len} characters is too short for a timestamp range")]
    RangeTooShort {
        /// Length of the line
        len: usize,
    },

    /// The ` --> ` separator is missing.
    #[error("Missing ' --> ' in '{line}'")]
    MissingSeparator {
        /// Rejected line
        line: String,
    },

    /// The range doesn't end after it starts.
    #[error("Range ends at {end:?} before it starts at {start:?}")]
    Reversed {
        /// Start of the range
        start: TimePoint,
        /// End of the range
        end: TimePoint,
    },
}

fn number(input: &str) -> IResult<&str, u64> {
    map_res(digit1, str::parse::<u64>).parse(input)
}

fn fields(input: &str) -> IResult<&str, Vec<u64>> {
    separated_list1(char(':'), number).parse(input)
}

/// Parse a `HH:MM:SS<mark>mmm` or `MM:SS<mark>mmm` timestamp into seconds.
///
/// The millisecond part is read as an integer count of milliseconds.
///
/// # Errors
///
/// Will return `DecimalMark` if `text` doesn't contain exactly one `mark`,
/// `FieldCount` if the integer part is not made of 2 or 3 fields
/// and `NotNumeric` if a field is not a number.
pub fn parse_timestamp(text: &str, mark: DecimalMark) -> Result<f64, TimestampError> {
    let text = text.trim();
    let mut parts = text.split(mark.as_char());
    let (Some(integer), Some(fraction), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(TimestampError::DecimalMark {
            mark,
            text: text.into(),
        });
    };

    let not_numeric = |source| TimestampError::NotNumeric {
        text: text.into(),
        source,
    };
    let hms = fields(integer).to_result_no_rest().map_err(not_numeric)?;
    let millis = number(fraction).to_result_no_rest().map_err(not_numeric)?;

    let seconds = match hms.as_slice() {
        &[hours, minutes, seconds] => {
            cast::f64(hours) * 3600. + cast::f64(minutes) * 60. + cast::f64(seconds)
        }
        &[minutes, seconds] => cast::f64(minutes) * 60. + cast::f64(seconds),
        _ => {
            return Err(TimestampError::FieldCount {
                count: hms.len(),
                text: text.into(),
            })
        }
    };
    Ok(seconds + cast::f64(millis) / 1000.)
}

/// Parse a `start --> end` line.
///
/// Anything following the end timestamp after a whitespace (`WebVTT` cue settings) is ignored.
///
/// # Errors
///
/// Will return `RangeTooShort` or `MissingSeparator` if the line doesn't have the shape of
/// a range, `Reversed` if the end is not after the start, or the error of the failing
/// [`parse_timestamp`].
pub fn parse_timestamp_range(line: &str, mark: DecimalMark) -> Result<TimeSpan, TimestampError> {
    if line.len() < RANGE_MIN_LEN {
        return Err(TimestampError::RangeTooShort { len: line.len() });
    }
    let separator = line
        .get(RANGE_SEPARATOR_MIN_COLUMN..)
        .and_then(|tail| tail.find(RANGE_SEPARATOR))
        .map(|pos| pos + RANGE_SEPARATOR_MIN_COLUMN)
        .ok_or_else(|| TimestampError::MissingSeparator { line: line.into() })?;

    let start = parse_timestamp(&line[..separator], mark)?;
    let end_half = &line[separator + RANGE_SEPARATOR.len()..];
    let end_stamp = end_half.split_whitespace().next().unwrap_or_default();
    let end = parse_timestamp(end_stamp, mark)?;

    let (start, end) = (TimePoint::from_secs(start), TimePoint::from_secs(end));
    if end <= start {
        trace!("Reversed timestamp range: '{line}'");
        return Err(TimestampError::Reversed { start, end });
    }
    Ok(TimeSpan::new(start, end))
}
