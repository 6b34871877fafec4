//! Player configuration.
//!
//! The configuration is assembled with a [`PlayerConfigBuilder`], validated once by
//! [`PlayerConfigBuilder::build`], then handed to each component which copies the values
//! it needs. A [`PlayerConfig`] is always valid.

use std::{ops::RangeInclusive, time::Duration};
use thiserror::Error;

use crate::color::{HexColor, LayerColor};

/// Error for invalid configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A value is outside its allowed range.
    #[error("'{field}' value {value} is outside of [{min}, {max}]")]
    OutOfRange {
        /// Name of the configuration field
        field: &'static str,
        /// Rejected value
        value: f64,
        /// Minimum allowed value
        min: f64,
        /// Maximum allowed value
        max: f64,
    },
}

/// Allowed seek step, in seconds.
pub const SEEK_BY_RANGE: RangeInclusive<f64> = 0.0..=99.0;
/// Allowed maximum volume.
pub const MAX_VOLUME_RANGE: RangeInclusive<f64> = 0.1..=10.0;
/// Allowed subtitle font size, in pixels.
pub const FONT_SIZE_RANGE: RangeInclusive<f64> = 10.0..=100.0;
/// Allowed subtitle vertical position, in percent.
pub const VERTICAL_POSITION_RANGE: RangeInclusive<f64> = 0.0..=100.0;
/// Allowed subtitle shift slider bound, in seconds.
pub const SHIFT_LIMIT_RANGE: RangeInclusive<f64> = 0.1..=3600.0;
/// Allowed caption color opacity, in percent.
pub const OPACITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;

/// Immutable and validated settings of a player session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    seek_by: f64,
    double_click_threshold: Duration,
    seek_stacking_threshold: Duration,
    inactivity_time: Duration,
    toast_duration: Duration,
    buffering_delay: Duration,
    popup_duration: Duration,
    enable_double_tap_seek: bool,
    sanitize_subtitles: bool,
    allow_cue_overlap: bool,
    max_volume: f64,
    always_show_controls: bool,
    show_controls_on_pause: bool,
    subtitle_font_size: f64,
    subtitle_vertical_position: f64,
    subtitle_shift_limit: f64,
    subtitle_foreground: LayerColor,
    subtitle_background: LayerColor,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seek_by: 5.,
            double_click_threshold: Duration::from_millis(250),
            seek_stacking_threshold: Duration::from_millis(250),
            inactivity_time: Duration::from_millis(2500),
            toast_duration: Duration::from_millis(3000),
            buffering_delay: Duration::from_millis(200),
            popup_duration: Duration::from_millis(200),
            enable_double_tap_seek: false,
            sanitize_subtitles: true,
            allow_cue_overlap: true,
            max_volume: 1.,
            always_show_controls: false,
            show_controls_on_pause: true,
            subtitle_font_size: 30.,
            subtitle_vertical_position: 16.,
            subtitle_shift_limit: 20.,
            subtitle_foreground: LayerColor {
                color: HexColor::new(0xfb, 0xf1, 0xc7),
                opacity: 100.,
            },
            subtitle_background: LayerColor {
                color: HexColor::new(0x1d, 0x20, 0x21),
                opacity: 80.,
            },
        }
    }
}

fn check(field: &'static str, value: f64, range: &RangeInclusive<f64>) -> Result<(), ConfigError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Builder of a [`PlayerConfig`], starting from the default settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerConfigBuilder {
    config: PlayerConfig,
}

impl PlayerConfigBuilder {
    /// Check every value and return the configuration.
    ///
    /// # Errors
    ///
    /// Will return `OutOfRange` for the first value outside of its range.
    pub fn build(self) -> Result<PlayerConfig, ConfigError> {
        let config = self.config;
        check("seek_by", config.seek_by, &SEEK_BY_RANGE)?;
        check("max_volume", config.max_volume, &MAX_VOLUME_RANGE)?;
        check(
            "subtitle_font_size",
            config.subtitle_font_size,
            &FONT_SIZE_RANGE,
        )?;
        check(
            "subtitle_vertical_position",
            config.subtitle_vertical_position,
            &VERTICAL_POSITION_RANGE,
        )?;
        check(
            "subtitle_shift_limit",
            config.subtitle_shift_limit,
            &SHIFT_LIMIT_RANGE,
        )?;
        check(
            "subtitle_foreground_opacity",
            config.subtitle_foreground.opacity,
            &OPACITY_RANGE,
        )?;
        check(
            "subtitle_background_opacity",
            config.subtitle_background.opacity,
            &OPACITY_RANGE,
        )?;
        Ok(config)
    }

    /// Seek step of arrow keys and double taps, in seconds.
    #[must_use]
    pub const fn with_seek_by(mut self, seconds: f64) -> Self {
        self.config.seek_by = seconds;
        self
    }

    /// Delay to wait for a second click before handling a single click.
    #[must_use]
    pub const fn with_double_click_threshold(mut self, delay: Duration) -> Self {
        self.config.double_click_threshold = delay;
        self
    }

    /// Delay during which repeated seeks stack up.
    #[must_use]
    pub const fn with_seek_stacking_threshold(mut self, delay: Duration) -> Self {
        self.config.seek_stacking_threshold = delay;
        self
    }

    /// Delay without activity before the controls are hidden.
    #[must_use]
    pub const fn with_inactivity_time(mut self, delay: Duration) -> Self {
        self.config.inactivity_time = delay;
        self
    }

    /// Display duration of toast messages.
    #[must_use]
    pub const fn with_toast_duration(mut self, delay: Duration) -> Self {
        self.config.toast_duration = delay;
        self
    }

    /// Delay of waiting before the buffering indicator is shown.
    #[must_use]
    pub const fn with_buffering_delay(mut self, delay: Duration) -> Self {
        self.config.buffering_delay = delay;
        self
    }

    /// Display duration of the play/pause popup.
    #[must_use]
    pub const fn with_popup_duration(mut self, delay: Duration) -> Self {
        self.config.popup_duration = delay;
        self
    }

    /// Enable seeking with double taps on the sides of the player.
    #[must_use]
    pub const fn with_double_tap_seek(mut self, enable: bool) -> Self {
        self.config.enable_double_tap_seek = enable;
        self
    }

    /// Sanitize cue markup when a track is loaded.
    #[must_use]
    pub const fn with_sanitize_subtitles(mut self, enable: bool) -> Self {
        self.config.sanitize_subtitles = enable;
        self
    }

    /// Display every active cue, instead of only the last one.
    #[must_use]
    pub const fn with_cue_overlap(mut self, allow: bool) -> Self {
        self.config.allow_cue_overlap = allow;
        self
    }

    /// Maximum volume, above `1` when audio gain is used.
    #[must_use]
    pub const fn with_max_volume(mut self, volume: f64) -> Self {
        self.config.max_volume = volume;
        self
    }

    /// Never hide the controls.
    #[must_use]
    pub const fn with_always_show_controls(mut self, enable: bool) -> Self {
        self.config.always_show_controls = enable;
        self
    }

    /// Keep the controls visible while paused.
    #[must_use]
    pub const fn with_show_controls_on_pause(mut self, enable: bool) -> Self {
        self.config.show_controls_on_pause = enable;
        self
    }

    /// Initial subtitle font size, in pixels.
    #[must_use]
    pub const fn with_subtitle_font_size(mut self, size: f64) -> Self {
        self.config.subtitle_font_size = size;
        self
    }

    /// Initial subtitle position, in percent of the player height from the bottom.
    #[must_use]
    pub const fn with_subtitle_vertical_position(mut self, percent: f64) -> Self {
        self.config.subtitle_vertical_position = percent;
        self
    }

    /// Bound of the subtitle shift slider, in seconds.
    #[must_use]
    pub const fn with_subtitle_shift_limit(mut self, seconds: f64) -> Self {
        self.config.subtitle_shift_limit = seconds;
        self
    }

    /// Caption text color.
    #[must_use]
    pub const fn with_subtitle_foreground_color(mut self, color: HexColor) -> Self {
        self.config.subtitle_foreground.color = color;
        self
    }

    /// Caption text opacity, in percent.
    #[must_use]
    pub const fn with_subtitle_foreground_opacity(mut self, percent: f64) -> Self {
        self.config.subtitle_foreground.opacity = percent;
        self
    }

    /// Caption background color.
    #[must_use]
    pub const fn with_subtitle_background_color(mut self, color: HexColor) -> Self {
        self.config.subtitle_background.color = color;
        self
    }

    /// Caption background opacity, in percent.
    #[must_use]
    pub const fn with_subtitle_background_opacity(mut self, percent: f64) -> Self {
        self.config.subtitle_background.opacity = percent;
        self
    }
}

impl PlayerConfig {
    /// Start a configuration from the default settings.
    #[must_use]
    pub fn builder() -> PlayerConfigBuilder {
        PlayerConfigBuilder::default()
    }

    /// Seek step in seconds.
    #[must_use]
    pub const fn seek_by(&self) -> f64 {
        self.seek_by
    }

    /// Delay to wait for a second click.
    #[must_use]
    pub const fn double_click_threshold(&self) -> Duration {
        self.double_click_threshold
    }

    /// Delay during which repeated seeks stack up.
    #[must_use]
    pub const fn seek_stacking_threshold(&self) -> Duration {
        self.seek_stacking_threshold
    }

    /// Delay before the controls are hidden.
    #[must_use]
    pub const fn inactivity_time(&self) -> Duration {
        self.inactivity_time
    }

    /// Display duration of toast messages.
    #[must_use]
    pub const fn toast_duration(&self) -> Duration {
        self.toast_duration
    }

    /// Delay before the buffering indicator is shown.
    #[must_use]
    pub const fn buffering_delay(&self) -> Duration {
        self.buffering_delay
    }

    /// Display duration of the play/pause popup.
    #[must_use]
    pub const fn popup_duration(&self) -> Duration {
        self.popup_duration
    }

    /// Is double tap seeking enabled.
    #[must_use]
    pub const fn double_tap_seek(&self) -> bool {
        self.enable_double_tap_seek
    }

    /// Is cue markup sanitized on load.
    #[must_use]
    pub const fn sanitize_subtitles(&self) -> bool {
        self.sanitize_subtitles
    }

    /// Are all overlapping cues displayed.
    #[must_use]
    pub const fn allow_cue_overlap(&self) -> bool {
        self.allow_cue_overlap
    }

    /// Maximum volume.
    #[must_use]
    pub const fn max_volume(&self) -> f64 {
        self.max_volume
    }

    /// Are the controls never hidden.
    #[must_use]
    pub const fn always_show_controls(&self) -> bool {
        self.always_show_controls
    }

    /// Are the controls kept visible while paused.
    #[must_use]
    pub const fn show_controls_on_pause(&self) -> bool {
        self.show_controls_on_pause
    }

    /// Initial subtitle font size.
    #[must_use]
    pub const fn subtitle_font_size(&self) -> f64 {
        self.subtitle_font_size
    }

    /// Initial subtitle vertical position.
    #[must_use]
    pub const fn subtitle_vertical_position(&self) -> f64 {
        self.subtitle_vertical_position
    }

    /// Bound of the subtitle shift slider.
    #[must_use]
    pub const fn subtitle_shift_limit(&self) -> f64 {
        self.subtitle_shift_limit
    }

    /// Caption text color and opacity.
    #[must_use]
    pub const fn subtitle_foreground(&self) -> &LayerColor {
        &self.subtitle_foreground
    }

    /// Caption background color and opacity.
    #[must_use]
    pub const fn subtitle_background(&self) -> &LayerColor {
        &self.subtitle_background
    }
}
