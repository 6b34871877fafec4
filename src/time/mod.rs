//! Timestamp codec: parse textual timecodes into seconds, and display seconds
//! back in the compact form shown next to a progress bar.
mod parse;
mod time_point;
mod time_span;

pub use parse::{parse_timestamp, parse_timestamp_range, DecimalMark, TimestampError};
pub use time_point::TimePoint;
pub use time_span::TimeSpan;

/// Format a playback position in `[H:]MM:SS` form.
///
/// The hour field is omitted when it is zero. `NaN`, infinite and negative
/// values are displayed as `00:00`.
#[must_use]
pub fn format_timestamp(seconds: f64) -> String {
    TimePoint::from_secs(seconds).to_string()
}
