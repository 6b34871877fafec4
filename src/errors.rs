//! Custom error types.

use thiserror::Error;

/// A type representing errors that are specific to `subplay`. Each module returns its own
/// error type, this one allows to handle them together.
#[derive(Debug, Error)]
pub enum SubplayError {
    /// Malformed caption color.
    #[error("Invalid color")]
    Color(#[from] crate::color::ColorError),

    /// Invalid player configuration.
    #[error("Invalid configuration")]
    Config(#[from] crate::config::ConfigError),

    /// A subtitle file couldn't be added as a track.
    #[error("Failed to load subtitle track")]
    Load(#[from] crate::track::LoadError),

    /// Malformed timestamp.
    #[error("Invalid timestamp")]
    Timestamp(#[from] crate::time::TimestampError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::HexColor, config::PlayerConfig, time::parse_timestamp, time::DecimalMark};
    use std::error::Error as _;

    fn load_config(seek_by: f64) -> Result<PlayerConfig, SubplayError> {
        Ok(PlayerConfig::builder().with_seek_by(seek_by).build()?)
    }

    #[test]
    fn conversions_keep_source() {
        let err = load_config(120.).unwrap_err();
        assert!(matches!(err, SubplayError::Config(_)));
        assert!(err.source().is_some());

        let err = SubplayError::from(parse_timestamp("00:01", DecimalMark::Dot).unwrap_err());
        assert!(matches!(err, SubplayError::Timestamp(_)));

        let err = SubplayError::from("#12345".parse::<HexColor>().unwrap_err());
        assert!(matches!(err, SubplayError::Color(_)));
        assert!(err.source().is_some());
    }
}
