use super::TimePoint;

/// Define a time span with a start time and an end time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSpan {
    /// Start time of the span
    pub start: TimePoint,
    /// End time of the span
    pub end: TimePoint,
}

impl TimeSpan {
    /// Create a new `TimeSpan` from a start and an end.
    #[must_use]
    pub const fn new(start: TimePoint, end: TimePoint) -> Self {
        Self { start, end }
    }

    /// Create a new `TimeSpan` from start and end in seconds.
    #[must_use]
    pub const fn from_secs(start: f64, end: f64) -> Self {
        Self::new(TimePoint::from_secs(start), TimePoint::from_secs(end))
    }

    /// Is `time` inside the span, both bounds included.
    #[must_use]
    pub fn contains(&self, time: TimePoint) -> bool {
        self.start <= time && time <= self.end
    }

    /// Length of the span in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end.to_secs() - self.start.to_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let span = TimeSpan::from_secs(1., 3.);
        assert!(span.contains(TimePoint::from_secs(1.)));
        assert!(span.contains(TimePoint::from_secs(2.)));
        assert!(span.contains(TimePoint::from_secs(3.)));
        assert!(!span.contains(TimePoint::from_secs(0.999)));
        assert!(!span.contains(TimePoint::from_secs(3.001)));
        assert!(!span.contains(TimePoint::from_secs(f64::NAN)));
        assert!((span.duration() - 2.).abs() < f64::EPSILON);
    }
}
