use core::fmt;
use std::ops::{Add, Sub};

/// Define a time in seconds, as reported by a video element.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct TimePoint(f64);

impl TimePoint {
    /// The start of the media.
    pub const ZERO: Self = Self(0.);

    /// Create a `TimePoint` from seconds
    #[must_use]
    pub const fn from_secs(time: f64) -> Self {
        Self(time)
    }

    /// Create a `TimePoint` from miliseconds
    #[must_use]
    pub fn from_msecs(time: i64) -> Self {
        Self(cast::f64(time) / 1000.)
    }

    /// Convert to seconds
    #[must_use]
    pub const fn to_secs(self) -> f64 {
        self.0
    }

    /// `false` for `NaN` and infinite values.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0.is_finite()
    }

    /// Whole seconds, invalid and negative times are clamped to zero.
    fn whole_secs(self) -> u64 {
        if self.is_valid() {
            cast::u64(self.0.floor()).unwrap_or(0)
        } else {
            0
        }
    }

    fn hours(self) -> u64 {
        self.whole_secs() / (60 * 60)
    }

    fn mins_comp(self) -> u64 {
        (self.whole_secs() / 60) % 60
    }

    fn secs_comp(self) -> u64 {
        self.whole_secs() % 60
    }
}

impl Add<f64> for TimePoint {
    type Output = Self;
    fn add(self, offset: f64) -> Self {
        Self(self.0 + offset)
    }
}

impl Sub<f64> for TimePoint {
    type Output = Self;
    fn sub(self, offset: f64) -> Self {
        Self(self.0 - offset)
    }
}

impl From<f64> for TimePoint {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Compact `[H:]MM:SS` display, the hour field is only written when not zero.
impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.hours();
        if hours > 0 {
            write!(f, "{hours}:")?;
        }
        write!(f, "{:02}:{:02}", self.mins_comp(), self.secs_comp())
    }
}

#[cfg(test)]
mod tests {
    use super::TimePoint;

    #[test]
    fn msecs_to_secs() {
        assert!((TimePoint::from_msecs(1500).to_secs() - 1.5).abs() < f64::EPSILON);
        assert!((TimePoint::from_msecs(-250).to_secs() + 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn shift_by_offset() {
        let time = TimePoint::from_secs(10.) + 2.5;
        assert!((time.to_secs() - 12.5).abs() < f64::EPSILON);
        let time = time - 20.;
        assert!(time < TimePoint::ZERO);
        assert_eq!(time.to_string(), "00:00");
    }

    #[test]
    fn validity() {
        assert!(TimePoint::from_secs(3.).is_valid());
        assert!(!TimePoint::from_secs(f64::NAN).is_valid());
        assert!(!TimePoint::from_secs(f64::NEG_INFINITY).is_valid());
    }
}
