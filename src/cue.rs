//! A single timed caption entry.

use crate::time::{TimePoint, TimeSpan};

/// A caption with the time span during which it's displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    span: TimeSpan,
    text: String,
}

impl Cue {
    /// Create a cue displaying `text` during `span`.
    #[must_use]
    pub fn new(span: TimeSpan, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Start time of the cue, in seconds.
    #[must_use]
    pub const fn start_time(&self) -> f64 {
        self.span.start.to_secs()
    }

    /// End time of the cue, in seconds.
    #[must_use]
    pub const fn end_time(&self) -> f64 {
        self.span.end.to_secs()
    }

    /// Display time span of the cue.
    #[must_use]
    pub const fn span(&self) -> &TimeSpan {
        &self.span
    }

    /// Text of the cue. Markup safe for display once the track is loaded.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Is the cue displayed at `time` (in seconds).
    #[must_use]
    pub fn is_active_at(&self, time: f64) -> bool {
        self.span.contains(TimePoint::from_secs(time))
    }

    pub(crate) fn sanitize_text(&mut self) {
        self.text = crate::sanitize::sanitize(&self.text);
    }
}
