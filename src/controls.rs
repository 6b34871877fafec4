//! Player control behaviours driven by [`Scheduler`]s: seek stacking, click and double tap
//! detection, delayed indicators, the play/pause popup and auto-hiding of the controls.

use log::trace;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use crate::{
    config::PlayerConfig,
    scheduler::{Scheduler, Timeline},
};

/// Direction of a relative seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    /// Toward the start of the media.
    Backward,
    /// Toward the end of the media.
    Forward,
}

impl SeekDirection {
    /// Sign of the time delta.
    #[must_use]
    pub const fn signum(self) -> f64 {
        match self {
            Self::Backward => -1.,
            Self::Forward => 1.,
        }
    }
}

/// Result of a seek key press or double tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekPress {
    /// Signed time delta to apply to the playback position.
    pub delta: f64,
    /// Accumulated seek of the current burst of presses, for the indicator label.
    pub stacked: f64,
}

/// Accumulates repeated seeks in one direction.
///
/// Presses closer than the stacking threshold grow the displayed amount, the stack goes back
/// to a single step once the threshold elapsed without press.
#[derive(Debug)]
pub struct SeekStack {
    direction: SeekDirection,
    seek_by: f64,
    stack: Rc<Cell<f64>>,
    timer: Scheduler,
}

impl SeekStack {
    /// Create a stack seeking by `config.seek_by()` in `direction`.
    #[must_use]
    pub fn new(timeline: &Timeline, config: &PlayerConfig, direction: SeekDirection) -> Self {
        let seek_by = config.seek_by();
        let stack = Rc::new(Cell::new(seek_by));
        let timer = Scheduler::new(timeline, config.seek_stacking_threshold(), {
            let stack = Rc::clone(&stack);
            move || stack.set(seek_by)
        });
        Self {
            direction,
            seek_by,
            stack,
            timer,
        }
    }

    /// Register a press.
    pub fn press(&self) -> SeekPress {
        let stacked = if self.timer.in_progress() {
            let stacked = self.stack.get() + self.seek_by;
            self.stack.set(stacked);
            stacked
        } else {
            self.seek_by
        };
        self.timer.schedule();
        SeekPress {
            delta: self.direction.signum() * self.seek_by,
            stacked,
        }
    }

    /// Should the seek indicator be displayed.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.timer.in_progress()
    }

    /// Direction of the stack.
    #[must_use]
    pub const fn direction(&self) -> SeekDirection {
        self.direction
    }
}

/// Horizontal area of the player hit by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickArea {
    /// First 40 % of the width.
    Left,
    /// Central 20 %.
    Middle,
    /// Last 40 % of the width.
    Right,
}

impl ClickArea {
    /// Area of a click at `x` in a player of `width`, both relative to the player's left edge.
    #[must_use]
    pub fn from_position(x: f64, width: f64) -> Self {
        if x < width * 0.4 {
            Self::Left
        } else if width * 0.6 < x {
            Self::Right
        } else {
            Self::Middle
        }
    }
}

/// What the host should do after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    /// Toggle playback now.
    TogglePlayback,
    /// Seek in the given direction.
    Seek(SeekDirection),
    /// Wait, a delayed toggle may follow through the `on_toggle` callback.
    Pending,
}

/// Tells single clicks from double taps.
pub struct ClickGesture {
    double_tap_seek: bool,
    double_tapped: Rc<Cell<bool>>,
    last_area: Cell<Option<ClickArea>>,
    timer: Scheduler,
}

impl ClickGesture {
    /// Create a detector calling `on_toggle` when a side click turns out to be a single click.
    pub fn new(
        timeline: &Timeline,
        config: &PlayerConfig,
        mut on_toggle: impl FnMut() + 'static,
    ) -> Self {
        let double_tapped = Rc::new(Cell::new(false));
        let timer = Scheduler::new(timeline, config.double_click_threshold(), {
            let double_tapped = Rc::clone(&double_tapped);
            move || {
                if !double_tapped.get() {
                    on_toggle();
                }
            }
        });
        Self {
            double_tap_seek: config.double_tap_seek(),
            double_tapped,
            last_area: Cell::new(None),
            timer,
        }
    }

    /// Register a click in `area`.
    pub fn click(&self, area: ClickArea) -> GestureAction {
        if !self.double_tap_seek {
            return GestureAction::TogglePlayback;
        }
        if area == ClickArea::Middle {
            self.timer.cancel();
            return GestureAction::TogglePlayback;
        }

        let action = if self.timer.in_progress() {
            self.double_tapped.set(true);
            match (self.last_area.get(), area) {
                (Some(ClickArea::Left), ClickArea::Left) => {
                    GestureAction::Seek(SeekDirection::Backward)
                }
                (Some(ClickArea::Right), ClickArea::Right) => {
                    GestureAction::Seek(SeekDirection::Forward)
                }
                _ => GestureAction::Pending,
            }
        } else {
            self.double_tapped.set(false);
            GestureAction::Pending
        };
        trace!("Click in {area:?}: {action:?}");

        self.timer.schedule();
        self.last_area.set(Some(area));
        action
    }
}

impl std::fmt::Debug for ClickGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClickGesture")
            .field("double_tap_seek", &self.double_tap_seek)
            .field("double_tapped", &self.double_tapped.get())
            .field("last_area", &self.last_area.get())
            .finish_non_exhaustive()
    }
}

/// Indicator shown only if a condition lasts longer than a delay (buffering spinner).
#[derive(Debug)]
pub struct DelayedIndicator {
    shown: Rc<Cell<bool>>,
    timer: Scheduler,
}

impl DelayedIndicator {
    /// Create a hidden indicator shown `delay` after [`start`](Self::start).
    #[must_use]
    pub fn new(timeline: &Timeline, delay: Duration) -> Self {
        let shown = Rc::new(Cell::new(false));
        let timer = Scheduler::new(timeline, delay, {
            let shown = Rc::clone(&shown);
            move || shown.set(true)
        });
        Self { shown, timer }
    }

    /// Buffering indicator of `config`.
    #[must_use]
    pub fn buffering(timeline: &Timeline, config: &PlayerConfig) -> Self {
        Self::new(timeline, config.buffering_delay())
    }

    /// The condition started.
    pub fn start(&self) {
        if !self.shown.get() {
            self.timer.schedule();
        }
    }

    /// The condition ended: cancel the pending display and hide.
    pub fn stop(&self) {
        self.timer.cancel();
        self.shown.set(false);
    }

    /// Is the indicator displayed.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown.get()
    }
}

#[derive(Debug, Default)]
struct Visibility {
    visible: Cell<bool>,
    playing: Cell<bool>,
    pinned: Cell<bool>,
}

/// Hides the player controls after a period of inactivity.
#[derive(Debug)]
pub struct AutoHide {
    state: Rc<Visibility>,
    always_show: bool,
    show_on_pause: bool,
    timer: Scheduler,
}

impl AutoHide {
    /// Create visible controls, hidden `config.inactivity_time()` after the last activity.
    #[must_use]
    pub fn new(timeline: &Timeline, config: &PlayerConfig) -> Self {
        let always_show = config.always_show_controls();
        let show_on_pause = config.show_controls_on_pause();
        let state = Rc::new(Visibility {
            visible: Cell::new(true),
            ..Visibility::default()
        });
        let timer = Scheduler::new(timeline, config.inactivity_time(), {
            let state = Rc::clone(&state);
            move || Self::try_hide(&state, always_show, show_on_pause)
        });
        Self {
            state,
            always_show,
            show_on_pause,
            timer,
        }
    }

    fn try_hide(state: &Visibility, always_show: bool, show_on_pause: bool) {
        if always_show || state.pinned.get() || (!state.playing.get() && show_on_pause) {
            return;
        }
        state.visible.set(false);
    }

    /// Pointer or touch activity: show the controls and restart the inactivity delay.
    pub fn activity(&self) {
        self.state.visible.set(true);
        self.timer.schedule();
    }

    /// The pointer left the player: hide now if allowed.
    pub fn leave(&self) {
        self.timer.cancel();
        Self::try_hide(&self.state, self.always_show, self.show_on_pause);
    }

    /// Playback started or paused.
    pub fn set_playing(&self, playing: bool) {
        self.state.playing.set(playing);
        if playing {
            self.timer.schedule();
        } else if self.show_on_pause {
            self.state.visible.set(true);
        }
    }

    /// Keep the controls visible, while dragging the progress bar.
    pub fn set_pinned(&self, pinned: bool) {
        self.state.pinned.set(pinned);
    }

    /// Are the controls displayed.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible.get()
    }
}

/// Message displayed for a fixed duration, the last one replacing the previous.
#[derive(Debug)]
pub struct Toast {
    message: Rc<RefCell<Option<String>>>,
    timer: Scheduler,
}

impl Toast {
    /// Create an empty toast using `config.toast_duration()`.
    #[must_use]
    pub fn new(timeline: &Timeline, config: &PlayerConfig) -> Self {
        let message = Rc::new(RefCell::new(None));
        let timer = Scheduler::new(timeline, config.toast_duration(), {
            let message = Rc::clone(&message);
            move || *message.borrow_mut() = None
        });
        Self { message, timer }
    }

    /// Display `message`, restarting the duration.
    pub fn show(&self, message: impl Into<String>) {
        *self.message.borrow_mut() = Some(message.into());
        self.timer.schedule();
    }

    /// Displayed message.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.message.borrow().clone()
    }
}

/// Icon of the play/pause popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackIcon {
    /// Playback started.
    Play,
    /// Playback paused.
    Pause,
}

/// Icon flashed over the video when playback starts or pauses.
#[derive(Debug)]
pub struct PlaybackPopup {
    icon: Rc<Cell<Option<PlaybackIcon>>>,
    timer: Scheduler,
}

impl PlaybackPopup {
    /// Create a hidden popup, displayed for `config.popup_duration()`.
    #[must_use]
    pub fn new(timeline: &Timeline, config: &PlayerConfig) -> Self {
        let icon = Rc::new(Cell::new(None));
        let timer = Scheduler::new(timeline, config.popup_duration(), {
            let icon = Rc::clone(&icon);
            move || icon.set(None)
        });
        Self { icon, timer }
    }

    /// Display `icon` now and restart the duration.
    pub fn show(&self, icon: PlaybackIcon) {
        trace!("Playback popup: {icon:?}");
        self.icon.set(Some(icon));
        self.timer.schedule();
    }

    /// Displayed icon.
    #[must_use]
    pub fn icon(&self) -> Option<PlaybackIcon> {
        self.icon.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    const fn pressed(delta: f64, stacked: f64) -> SeekPress {
        SeekPress { delta, stacked }
    }

    #[test]
    fn seek_stacking() {
        let timeline = Timeline::new();
        let config = PlayerConfig::default();
        let forward = SeekStack::new(&timeline, &config, SeekDirection::Forward);
        let backward = SeekStack::new(&timeline, &config, SeekDirection::Backward);

        assert_eq!(forward.press(), pressed(5., 5.));
        timeline.advance(ms(200));
        assert_eq!(forward.press(), pressed(5., 10.));
        timeline.advance(ms(200));
        assert_eq!(forward.press(), pressed(5., 15.));
        assert!(forward.is_shown());
        assert!(!backward.is_shown());

        timeline.advance(ms(250));
        assert!(!forward.is_shown());
        assert_eq!(forward.press(), pressed(5., 5.));
        assert_eq!(backward.press(), pressed(-5., 5.));
        assert_eq!(backward.direction(), SeekDirection::Backward);
    }

    #[test]
    fn click_areas() {
        assert_eq!(ClickArea::from_position(0., 1000.), ClickArea::Left);
        assert_eq!(ClickArea::from_position(399., 1000.), ClickArea::Left);
        assert_eq!(ClickArea::from_position(400., 1000.), ClickArea::Middle);
        assert_eq!(ClickArea::from_position(600., 1000.), ClickArea::Middle);
        assert_eq!(ClickArea::from_position(601., 1000.), ClickArea::Right);
    }

    fn gesture(timeline: &Timeline, double_tap_seek: bool) -> (ClickGesture, Rc<Cell<u32>>) {
        let toggles = Rc::new(Cell::new(0));
        let config = PlayerConfig::builder()
            .with_double_tap_seek(double_tap_seek)
            .build()
            .unwrap();
        let gesture = ClickGesture::new(timeline, &config, {
            let toggles = Rc::clone(&toggles);
            move || toggles.set(toggles.get() + 1)
        });
        (gesture, toggles)
    }

    #[test]
    fn clicks_without_double_tap_seek() {
        let timeline = Timeline::new();
        let (gesture, toggles) = gesture(&timeline, false);
        assert_eq!(gesture.click(ClickArea::Left), GestureAction::TogglePlayback);
        assert_eq!(gesture.click(ClickArea::Left), GestureAction::TogglePlayback);
        timeline.advance(ms(1000));
        assert_eq!(toggles.get(), 0);
    }

    #[test]
    fn single_click_toggles_after_threshold() {
        let timeline = Timeline::new();
        let (gesture, toggles) = gesture(&timeline, true);
        assert_eq!(gesture.click(ClickArea::Right), GestureAction::Pending);
        timeline.advance(ms(249));
        assert_eq!(toggles.get(), 0);
        timeline.advance(ms(1));
        assert_eq!(toggles.get(), 1);
    }

    #[test]
    fn double_tap_seeks() {
        let timeline = Timeline::new();
        let (gesture, toggles) = gesture(&timeline, true);
        gesture.click(ClickArea::Left);
        timeline.advance(ms(100));
        assert_eq!(
            gesture.click(ClickArea::Left),
            GestureAction::Seek(SeekDirection::Backward)
        );
        timeline.advance(ms(100));
        assert_eq!(
            gesture.click(ClickArea::Left),
            GestureAction::Seek(SeekDirection::Backward)
        );
        timeline.advance(ms(1000));
        assert_eq!(toggles.get(), 0);

        gesture.click(ClickArea::Left);
        timeline.advance(ms(100));
        assert_eq!(gesture.click(ClickArea::Right), GestureAction::Pending);
        timeline.advance(ms(1000));
        assert_eq!(toggles.get(), 0);
    }

    #[test]
    fn middle_click_toggles_now() {
        let timeline = Timeline::new();
        let (gesture, toggles) = gesture(&timeline, true);
        gesture.click(ClickArea::Right);
        assert_eq!(gesture.click(ClickArea::Middle), GestureAction::TogglePlayback);
        timeline.advance(ms(1000));
        assert_eq!(toggles.get(), 0);
    }

    #[test]
    fn buffering_indicator() {
        let timeline = Timeline::new();
        let indicator = DelayedIndicator::buffering(&timeline, &PlayerConfig::default());

        indicator.start();
        timeline.advance(ms(150));
        indicator.stop();
        timeline.advance(ms(150));
        assert!(!indicator.is_shown());

        indicator.start();
        timeline.advance(ms(200));
        assert!(indicator.is_shown());
        indicator.start();
        assert!(indicator.is_shown());
        indicator.stop();
        assert!(!indicator.is_shown());
    }

    #[test]
    fn controls_hide_after_inactivity() {
        let timeline = Timeline::new();
        let controls = AutoHide::new(&timeline, &PlayerConfig::default());
        controls.set_playing(true);
        assert!(controls.is_visible());

        timeline.advance(ms(2000));
        controls.activity();
        timeline.advance(ms(2000));
        assert!(controls.is_visible());
        timeline.advance(ms(500));
        assert!(!controls.is_visible());

        controls.activity();
        controls.set_pinned(true);
        timeline.advance(ms(3000));
        assert!(controls.is_visible());
        controls.set_pinned(false);
        controls.leave();
        assert!(!controls.is_visible());
    }

    #[test]
    fn controls_stay_on_pause() {
        let timeline = Timeline::new();
        let controls = AutoHide::new(&timeline, &PlayerConfig::default());
        controls.activity();
        timeline.advance(ms(3000));
        assert!(controls.is_visible());

        let config = PlayerConfig::builder()
            .with_show_controls_on_pause(false)
            .build()
            .unwrap();
        let controls = AutoHide::new(&timeline, &config);
        controls.activity();
        timeline.advance(ms(3000));
        assert!(!controls.is_visible());

        let config = PlayerConfig::builder()
            .with_always_show_controls(true)
            .build()
            .unwrap();
        let controls = AutoHide::new(&timeline, &config);
        controls.set_playing(true);
        controls.leave();
        assert!(controls.is_visible());
    }

    #[test]
    fn toast_replaces_message() {
        let timeline = Timeline::new();
        let toast = Toast::new(&timeline, &PlayerConfig::default());
        toast.show("Subtitles loaded");
        timeline.advance(ms(2000));
        toast.show("Shift: +0.5s");
        timeline.advance(ms(2000));
        assert_eq!(toast.message().as_deref(), Some("Shift: +0.5s"));
        timeline.advance(ms(1000));
        assert_eq!(toast.message(), None);
    }

    #[test]
    fn playback_popup_hides_after_duration() {
        let timeline = Timeline::new();
        let popup = PlaybackPopup::new(&timeline, &PlayerConfig::default());
        assert_eq!(popup.icon(), None);

        popup.show(PlaybackIcon::Pause);
        assert_eq!(popup.icon(), Some(PlaybackIcon::Pause));
        timeline.advance(ms(150));
        popup.show(PlaybackIcon::Play);
        timeline.advance(ms(150));
        assert_eq!(popup.icon(), Some(PlaybackIcon::Play));
        timeline.advance(ms(50));
        assert_eq!(popup.icon(), None);

        let config = PlayerConfig::builder()
            .with_popup_duration(ms(1000))
            .build()
            .unwrap();
        let popup = PlaybackPopup::new(&timeline, &config);
        popup.show(PlaybackIcon::Play);
        timeline.advance(ms(999));
        assert_eq!(popup.icon(), Some(PlaybackIcon::Play));
        timeline.advance(ms(1));
        assert_eq!(popup.icon(), None);
    }
}
