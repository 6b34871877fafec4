//! Value model of the settings widgets: numeric sliders, on/off switchers and color inputs.
//!
//! Widgets own their value and call an injected callback on user input. Rendering is left
//! to the host.

use compact_str::CompactString;
use std::fmt;

use crate::{
    color::{ColorError, HexColor},
    config::{PlayerConfig, FONT_SIZE_RANGE, OPACITY_RANGE, VERTICAL_POSITION_RANGE},
};

type InputCallback = Box<dyn FnMut(f64)>;
type ActionCallback = Box<dyn FnMut(bool)>;
type ColorCallback = Box<dyn FnMut(HexColor)>;

/// Bounded numeric setting moved by steps.
pub struct Slider {
    label: CompactString,
    min: f64,
    max: f64,
    step: f64,
    precision: usize,
    value: f64,
    suffix: CompactString,
    include_sign: bool,
    on_input: Option<InputCallback>,
}

impl Slider {
    /// Create a slider, `value` is clamped to `min..=max`.
    ///
    /// Reversed bounds are swapped and a `NaN` bound takes the value of the other one.
    /// A non-finite step is replaced by `0`.
    #[must_use]
    pub fn new(label: &str, min: f64, max: f64, step: f64, value: f64) -> Self {
        let (min, max) = normalize_bounds(min, max);
        let step = if step.is_finite() { step.abs() } else { 0. };
        let mut slider = Self {
            label: label.into(),
            min,
            max,
            step,
            precision: precision_of(step),
            value: min,
            suffix: CompactString::default(),
            include_sign: false,
            on_input: None,
        };
        slider.set_value(value);
        slider
    }

    /// Slider of the selected track shift, in seconds.
    #[must_use]
    pub fn subtitle_shift(config: &PlayerConfig) -> Self {
        let limit = config.subtitle_shift_limit();
        Self::new("Subtitle shift", -limit, limit, 0.1, 0.)
            .with_suffix("s")
            .with_sign()
    }

    /// Slider of the caption font size, in pixels.
    #[must_use]
    pub fn subtitle_size(config: &PlayerConfig) -> Self {
        let (min, max) = FONT_SIZE_RANGE.into_inner();
        Self::new("Subtitle size", min, max, 1., config.subtitle_font_size()).with_suffix("px")
    }

    /// Slider of the caption vertical position, in percent of the player height.
    #[must_use]
    pub fn subtitle_position(config: &PlayerConfig) -> Self {
        let (min, max) = VERTICAL_POSITION_RANGE.into_inner();
        let value = config.subtitle_vertical_position();
        Self::new("Vertical position", min, max, 1., value).with_suffix("%")
    }

    /// Slider of the caption text opacity, in percent.
    #[must_use]
    pub fn subtitle_foreground_opacity(config: &PlayerConfig) -> Self {
        let value = config.subtitle_foreground().opacity;
        Self::opacity("Text opacity", value)
    }

    /// Slider of the caption background opacity, in percent.
    #[must_use]
    pub fn subtitle_background_opacity(config: &PlayerConfig) -> Self {
        let value = config.subtitle_background().opacity;
        Self::opacity("Background opacity", value)
    }

    fn opacity(label: &str, value: f64) -> Self {
        let (min, max) = OPACITY_RANGE.into_inner();
        Self::new(label, min, max, 1., value).with_suffix("%")
    }

    /// Slider of the playback rate.
    #[must_use]
    pub fn playback_speed() -> Self {
        Self::new("Playback speed", 0.25, 5., 0.25, 1.).with_suffix("x")
    }

    /// Unit displayed after the value.
    #[must_use]
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Display a `+` before positive values.
    #[must_use]
    pub const fn with_sign(mut self) -> Self {
        self.include_sign = true;
        self
    }

    /// Callback called with the new value on each [`shift`](Self::shift).
    #[must_use]
    pub fn with_on_input(mut self, on_input: impl FnMut(f64) + 'static) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    /// User input: move the value by `step` and notify. A zero step notifies the current value.
    pub fn shift(&mut self, step: f64) {
        self.set_value(self.value + step);
        if let Some(on_input) = self.on_input.as_mut() {
            on_input(self.value);
        }
    }

    /// Move one step up.
    pub fn step_up(&mut self) {
        self.shift(self.step);
    }

    /// Move one step down.
    pub fn step_down(&mut self) {
        self.shift(-self.step);
    }

    /// Programmatic update, without notification. Invalid values are ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.value = self.round(value.clamp(self.min, self.max));
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Name of the setting.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of decimals displayed, the decimals of the step.
    #[must_use]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Display of the current value, like `+1.5s`.
    #[must_use]
    pub fn value_string(&self) -> String {
        self.format_value(self.value)
    }

    /// Display of `value` clamped to the slider range.
    #[must_use]
    pub fn format_value(&self, value: f64) -> String {
        // Adding zero turns -0 into 0.
        let value = self.round(value.clamp(self.min, self.max)) + 0.;
        let sign = if self.include_sign && value > 0. { "+" } else { "" };
        format!(
            "{sign}{value:.precision$}{suffix}",
            precision = self.precision,
            suffix = self.suffix
        )
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10_f64.powi(i32::try_from(self.precision).unwrap_or(i32::MAX));
        (value * scale).round() / scale
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("label", &self.label)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

fn normalize_bounds(min: f64, max: f64) -> (f64, f64) {
    let (min, max) = match (min.is_nan(), max.is_nan()) {
        (true, true) => (0., 0.),
        (true, false) => (max, max),
        (false, true) => (min, min),
        (false, false) => (min, max),
    };
    if min > max {
        (max, min)
    } else {
        (min, max)
    }
}

/// Decimals in the shortest display of `step`.
fn precision_of(step: f64) -> usize {
    let text = step.to_string();
    text.find('.').map_or(0, |dot| text.len() - dot - 1)
}

/// On/off setting.
pub struct Switcher {
    label: CompactString,
    enabled: bool,
    on_action: Option<ActionCallback>,
}

impl Switcher {
    /// Create a switcher in `enabled` state.
    #[must_use]
    pub fn new(label: &str, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
            on_action: None,
        }
    }

    /// Callback called with the new state on each [`toggle`](Self::toggle).
    #[must_use]
    pub fn with_on_action(mut self, on_action: impl FnMut(bool) + 'static) -> Self {
        self.on_action = Some(Box::new(on_action));
        self
    }

    /// User input: flip the state and notify.
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        if let Some(on_action) = self.on_action.as_mut() {
            on_action(self.enabled);
        }
    }

    /// Programmatic update, without notification.
    pub fn set_state(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> bool {
        self.enabled
    }

    /// Name of the setting.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Switcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switcher")
            .field("label", &self.label)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

/// Color setting typed as `#rrggbb`.
pub struct ColorPicker {
    label: CompactString,
    color: HexColor,
    on_input: Option<ColorCallback>,
}

impl ColorPicker {
    /// Create a picker showing `color`.
    #[must_use]
    pub fn new(label: &str, color: HexColor) -> Self {
        Self {
            label: label.into(),
            color,
            on_input: None,
        }
    }

    /// Picker of the caption text color.
    #[must_use]
    pub fn subtitle_foreground(config: &PlayerConfig) -> Self {
        Self::new("Text color", config.subtitle_foreground().color)
    }

    /// Picker of the caption background color.
    #[must_use]
    pub fn subtitle_background(config: &PlayerConfig) -> Self {
        Self::new("Background color", config.subtitle_background().color)
    }

    /// Callback called with the new color on each valid [`input`](Self::input).
    #[must_use]
    pub fn with_on_input(mut self, on_input: impl FnMut(HexColor) + 'static) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    /// User input: parse `text` and notify.
    ///
    /// # Errors
    ///
    /// Will return `ColorError` if `text` is not a `#rrggbb` color, the color is then unchanged.
    pub fn input(&mut self, text: &str) -> Result<(), ColorError> {
        self.color = text.parse()?;
        if let Some(on_input) = self.on_input.as_mut() {
            on_input(self.color);
        }
        Ok(())
    }

    /// Programmatic update, without notification.
    pub fn set_color(&mut self, color: HexColor) {
        self.color = color;
    }

    /// Current color.
    #[must_use]
    pub const fn color(&self) -> HexColor {
        self.color
    }

    /// Name of the setting.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for ColorPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorPicker")
            .field("label", &self.label)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
