//! Subtitle tracks of a player session, the selected track and the displayed caption.
//!
//! Playback time updates and shift or selection changes all end in the same
//! recomputation: the active cues of the selected track are looked up at the shifted time,
//! compared to the displayed ones, and the caption is only updated when they differ.

use log::{debug, trace, warn};
use std::time::Instant;

use crate::{
    config::PlayerConfig,
    cue::Cue,
    index::{find_active, ActiveCues},
    track::{FileInfo, LoadError, Track, TrackId},
};

/// Callbacks of a rendering collaborator. Every method has an empty default.
pub trait SubtitleListener {
    /// The displayed caption changed, text or visibility.
    fn cue_set_changed(&mut self, _caption: &Caption) {}

    /// A track was parsed and added.
    fn track_loaded(&mut self, _track: &Track) {}

    /// A track became the selected one.
    fn track_selected(&mut self, _track: &Track) {}
}

impl SubtitleListener for () {}

/// Caption area content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    text: String,
    visible: bool,
}

impl Caption {
    /// Markup of the active cues, one cue per line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Is the caption area shown.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }
}

/// Outcome of a recomputation of the active cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionChange {
    /// Same active cues as before, nothing to redisplay.
    Unchanged,
    /// New active cues, the caption text was replaced.
    Updated,
    /// No more active cue, the caption area was hidden.
    Hidden,
}

/// Where a subtitle resource comes from, and how to present it.
#[derive(Debug, Clone)]
pub struct TrackSource<'a> {
    url: &'a str,
    info: FileInfo,
    offset: f64,
}

impl<'a> TrackSource<'a> {
    /// Source named after the file name in `url`, without shift.
    #[must_use]
    pub fn from_url(url: &'a str) -> Self {
        Self {
            url,
            info: FileInfo::from_url(url),
            offset: 0.,
        }
    }

    /// Override the file information, for urls without file name (`blob:` urls).
    #[must_use]
    pub fn with_info(mut self, info: FileInfo) -> Self {
        self.info = info;
        self
    }

    /// Override the display name.
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.info = self.info.with_filename(name);
        self
    }

    /// Initial time shift in seconds.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

/// Tracks of a player session and the caption displayed from the selected one.
#[derive(Debug)]
pub struct SubtitleState<L = ()> {
    tracks: Vec<Track>,
    selected: Option<TrackId>,
    active: ActiveCues,
    caption: Caption,
    enabled: bool,
    time: f64,
    next_id: u64,
    sanitize: bool,
    allow_cue_overlap: bool,
    listener: L,
}

impl SubtitleState<()> {
    /// Create an empty state without listener.
    #[must_use]
    pub fn new(config: &PlayerConfig) -> Self {
        Self::with_listener(config, ())
    }
}

impl<L: SubtitleListener> SubtitleState<L> {
    /// Create an empty state notifying `listener`. Display starts disabled.
    #[must_use]
    pub fn with_listener(config: &PlayerConfig, listener: L) -> Self {
        Self {
            tracks: Vec::new(),
            selected: None,
            active: ActiveCues::default(),
            caption: Caption::default(),
            enabled: false,
            time: 0.,
            next_id: 0,
            sanitize: config.sanitize_subtitles(),
            allow_cue_overlap: config.allow_cue_overlap(),
            listener,
        }
    }

    /// The notified listener.
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// The notified listener, mutable.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Parse a subtitle file content and add it as a track.
    ///
    /// The format comes from the extension of the source. Cue text is sanitized
    /// if the configuration asks for it.
    ///
    /// # Errors
    ///
    /// Will return `UnsupportedFormat` if the source extension is neither `srt` nor `vtt`
    /// and `EmptyTrack` if no cue was found. The state is unchanged in both cases.
    #[profiling::function]
    pub fn load_track(
        &mut self,
        source: &TrackSource<'_>,
        text: &str,
        make_selected: bool,
    ) -> Result<TrackId, LoadError> {
        let Some(format) = source.info.format() else {
            warn!("Unsupported subtitle extension: '{}'", source.info.extension());
            return Err(LoadError::UnsupportedFormat {
                extension: source.info.extension().into(),
            });
        };

        let parse_start = Instant::now();
        let mut cues = format.parse(text);
        debug!(
            "Parsed {format} track, cue count: {} in {:?}",
            cues.len(),
            parse_start.elapsed()
        );

        if self.sanitize && !cues.is_empty() {
            let sanitize_start = Instant::now();
            cues.iter_mut().for_each(Cue::sanitize_text);
            debug!("Sanitized in {:?}", sanitize_start.elapsed());
        }
        self.add_track(source, cues, make_selected)
    }

    /// Add a track made of already parsed `cues`.
    ///
    /// The track is selected if `make_selected`, which also enables display, or if
    /// display is enabled and no track is selected yet.
    ///
    /// # Errors
    ///
    /// Will return `UnsupportedFormat` if the source extension is neither `srt` nor `vtt`
    /// and `EmptyTrack` if `cues` is empty. The state is unchanged in both cases.
    pub fn add_track(
        &mut self,
        source: &TrackSource<'_>,
        cues: Vec<Cue>,
        make_selected: bool,
    ) -> Result<TrackId, LoadError> {
        let Some(format) = source.info.format() else {
            return Err(LoadError::UnsupportedFormat {
                extension: source.info.extension().into(),
            });
        };
        if cues.is_empty() {
            warn!("No cue in '{}', track not added", source.info.filename());
            return Err(LoadError::EmptyTrack {
                name: source.info.filename().into(),
            });
        }

        let id = TrackId::new(self.next_id);
        self.next_id += 1;
        self.tracks.push(Track::new(
            id,
            cues,
            source.info.filename(),
            format,
            source.url,
            source.offset,
        ));

        if make_selected {
            self.enable_track(id);
        } else if self.enabled && self.selected.is_none() {
            self.select_track(id);
        }

        if let Some(track) = self.tracks.iter().find(|track| track.id() == id) {
            self.listener.track_loaded(track);
        }
        Ok(id)
    }

    /// Make `id` the selected track and recompute the caption at the current time.
    /// Return `false` if there is no such track.
    pub fn select_track(&mut self, id: TrackId) -> bool {
        let Some(track) = self.tracks.iter().find(|track| track.id() == id) else {
            return false;
        };
        self.listener.track_selected(track);
        self.selected = Some(id);
        self.reset_display();
        self.refresh();
        true
    }

    /// Select the track loaded from `url`.
    pub fn select_by_url(&mut self, url: &str) -> bool {
        match self.id_by_url(url) {
            Some(id) => self.select_track(id),
            None => false,
        }
    }

    /// Enable the display and select `id`.
    pub fn enable_track(&mut self, id: TrackId) -> bool {
        if self.track(id).is_none() {
            return false;
        }
        self.enabled = true;
        self.select_track(id)
    }

    /// Enable the display, selecting the first track if none is selected.
    pub fn enable_subtitles(&mut self) {
        self.enabled = true;
        let first = self.tracks.first().map(Track::id);
        match (self.selected, first) {
            (None, Some(first)) => {
                self.select_track(first);
            }
            _ => {
                self.refresh();
            }
        }

        if !self.active.is_empty() && !self.caption.visible {
            self.caption.visible = true;
            self.listener.cue_set_changed(&self.caption);
        }
    }

    /// Disable the display. Selection and shifts are kept.
    pub fn disable_subtitles(&mut self) {
        self.enabled = false;
        if self.caption.visible {
            self.caption.visible = false;
            self.listener.cue_set_changed(&self.caption);
        }
    }

    /// Remove the track `id`.
    pub fn remove_track(&mut self, id: TrackId) -> Option<Track> {
        let index = self.tracks.iter().position(|track| track.id() == id)?;
        self.remove_at(index)
    }

    /// Remove the track at `index` in loading order.
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            return None;
        }
        let track = self.tracks.remove(index);
        if self.selected == Some(track.id()) {
            self.selected = None;
            self.reset_display();
        }
        Some(track)
    }

    /// Remove the track loaded from `url`.
    pub fn remove_by_url(&mut self, url: &str) -> Option<Track> {
        let id = self.id_by_url(url)?;
        self.remove_track(id)
    }

    /// Remove every track.
    pub fn clear_all(&mut self) {
        self.tracks.clear();
        self.selected = None;
        self.reset_display();
    }

    /// Set the time shift of `id`, in seconds.
    pub fn set_offset(&mut self, id: TrackId, seconds: f64) -> bool {
        self.update_offset(id, |_| seconds)
    }

    /// Add `delta` seconds to the time shift of `id`.
    pub fn shift_offset(&mut self, id: TrackId, delta: f64) -> bool {
        self.update_offset(id, |offset| offset + delta)
    }

    /// Set the time shift of the selected track.
    pub fn set_current_offset(&mut self, seconds: f64) -> bool {
        match self.selected {
            Some(id) => self.update_offset(id, |_| seconds),
            None => false,
        }
    }

    /// Add `delta` seconds to the time shift of the selected track.
    pub fn shift_current_offset(&mut self, delta: f64) -> bool {
        match self.selected {
            Some(id) => self.update_offset(id, |offset| offset + delta),
            None => false,
        }
    }

    /// Set the time shift of the track loaded from `url`.
    pub fn set_offset_by_url(&mut self, url: &str, seconds: f64) -> bool {
        self.id_by_url(url)
            .is_some_and(|id| self.update_offset(id, |_| seconds))
    }

    /// Time shift of `id`.
    #[must_use]
    pub fn offset(&self, id: TrackId) -> Option<f64> {
        self.track(id).map(Track::offset)
    }

    /// Time shift of the selected track, `0` without selection.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.selected_track().map_or(0., Track::offset)
    }

    /// Time shift of the track loaded from `url`, `0` if not found.
    #[must_use]
    pub fn offset_by_url(&self, url: &str) -> f64 {
        self.tracks
            .iter()
            .find(|track| track.source_url() == url)
            .map_or(0., Track::offset)
    }

    /// Playback time update. Invalid times (`NaN`, infinite) are ignored.
    pub fn tick(&mut self, time: f64) -> CaptionChange {
        if !time.is_finite() {
            trace!("Ignore invalid playback time {time}");
            return CaptionChange::Unchanged;
        }
        self.time = time;
        self.refresh()
    }

    /// Does any track match `predicate`.
    pub fn any_track_match(&self, predicate: impl FnMut(&Track) -> bool) -> bool {
        self.tracks.iter().any(predicate)
    }

    /// Tracks in loading order.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track `id`.
    #[must_use]
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id() == id)
    }

    /// The selected track.
    #[must_use]
    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.and_then(|id| self.track(id))
    }

    /// Cues currently displayed.
    #[must_use]
    pub fn active_cues(&self) -> Vec<&Cue> {
        self.selected_track()
            .map(|track| self.active.resolve(track.cues()).collect())
            .unwrap_or_default()
    }

    /// Caption area content.
    #[must_use]
    pub const fn caption(&self) -> &Caption {
        &self.caption
    }

    /// Is the display enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last valid playback time received.
    #[must_use]
    pub const fn current_time(&self) -> f64 {
        self.time
    }

    fn id_by_url(&self, url: &str) -> Option<TrackId> {
        self.tracks
            .iter()
            .find(|track| track.source_url() == url)
            .map(Track::id)
    }

    fn update_offset(&mut self, id: TrackId, update: impl FnOnce(f64) -> f64) -> bool {
        let Some(track) = self.tracks.iter_mut().find(|track| track.id() == id) else {
            return false;
        };
        let offset = update(track.offset());
        if !offset.is_finite() {
            warn!("Ignore invalid shift {offset} for track {id}");
            return false;
        }
        track.set_offset(offset);
        if self.selected == Some(id) {
            self.refresh();
        }
        true
    }

    /// Forget the displayed cues and hide the caption area.
    fn reset_display(&mut self) {
        self.active.clear();
        if self.caption != Caption::default() {
            self.caption = Caption::default();
            self.listener.cue_set_changed(&self.caption);
        }
    }

    /// Recompute the active cues of the selected track at the shifted current time.
    fn refresh(&mut self) -> CaptionChange {
        let Some(track) = self.selected.and_then(|id| self.track(id)) else {
            return CaptionChange::Unchanged;
        };
        let fresh = find_active(self.time + track.offset(), track.cues());

        if fresh.is_empty() {
            if self.active.is_empty() {
                return CaptionChange::Unchanged;
            }
            self.active.clear();
            self.caption = Caption::default();
            self.listener.cue_set_changed(&self.caption);
            return CaptionChange::Hidden;
        }
        if fresh == self.active {
            return CaptionChange::Unchanged;
        }

        let texts = fresh.resolve(track.cues()).map(Cue::text);
        let text = if self.allow_cue_overlap {
            texts.collect::<Vec<_>>().join("\n")
        } else {
            texts.last().unwrap_or_default().to_owned()
        };

        self.active = fresh;
        self.caption = Caption {
            text,
            visible: self.enabled,
        };
        self.listener.cue_set_changed(&self.caption);
        CaptionChange::Updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::SubtitleFormat;

    const SRT: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n\
                       2\n00:00:03,000 --> 00:00:04,000\n<i onclick=\"x()\">World</i>\n";
    const OVERLAP_VTT: &str = "WEBVTT\n\n\
                               00:00:01.000 --> 00:00:05.000\nFirst\n\n\
                               00:00:02.000 --> 00:00:06.000\nSecond\n";

    #[derive(Debug, Default)]
    struct Recorder {
        captions: Vec<Caption>,
        loaded: Vec<String>,
        selected: Vec<String>,
    }

    impl SubtitleListener for Recorder {
        fn cue_set_changed(&mut self, caption: &Caption) {
            self.captions.push(caption.clone());
        }
        fn track_loaded(&mut self, track: &Track) {
            self.loaded.push(track.name().to_owned());
        }
        fn track_selected(&mut self, track: &Track) {
            self.selected.push(track.name().to_owned());
        }
    }

    fn recording_state(config: &PlayerConfig) -> SubtitleState<Recorder> {
        SubtitleState::with_listener(config, Recorder::default())
    }

    #[test]
    fn load_and_select() {
        let mut state = recording_state(&PlayerConfig::default());
        let id = state
            .load_track(&TrackSource::from_url("https://host/movie.en.srt?t=1"), SRT, true)
            .unwrap();

        let track = state.selected_track().unwrap();
        assert_eq!(track.id(), id);
        assert_eq!(track.name(), "movie.en.srt");
        assert_eq!(track.format(), SubtitleFormat::Srt);
        assert_eq!(track.cues().len(), 2);
        assert!(state.is_enabled());
        assert_eq!(state.listener().loaded, ["movie.en.srt"]);
        assert_eq!(state.listener().selected, ["movie.en.srt"]);
    }

    #[test]
    fn load_sanitizes_cue_text() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        assert_eq!(state.tick(3.5), CaptionChange::Updated);
        assert_eq!(state.caption().text(), "<i>World</i>");

        let config = PlayerConfig::builder()
            .with_sanitize_subtitles(false)
            .build()
            .unwrap();
        let mut state = SubtitleState::new(&config);
        state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        state.tick(3.5);
        assert_eq!(state.caption().text(), "<i onclick=\"x()\">World</i>");
    }

    #[test]
    fn rejected_loads_leave_state_unchanged() {
        let mut state = recording_state(&PlayerConfig::default());

        let err = state
            .load_track(&TrackSource::from_url("movie.ass"), SRT, true)
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { extension } if extension == "ass"));

        let err = state
            .load_track(&TrackSource::from_url("empty.vtt"), "WEBVTT\n\n", true)
            .unwrap_err();
        assert!(matches!(err, LoadError::EmptyTrack { name } if name == "empty.vtt"));

        assert!(state.tracks().is_empty());
        assert!(!state.is_enabled());
        assert!(state.listener().loaded.is_empty());
    }

    #[test]
    fn blob_url_with_explicit_info() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        let source = TrackSource::from_url("blob:https://host/0e4c")
            .with_info(FileInfo::new("dropped.vtt", "vtt"))
            .with_offset(1.5);
        let id = state.load_track(&source, OVERLAP_VTT, false).unwrap();

        let track = state.track(id).unwrap();
        assert_eq!(track.name(), "dropped.vtt");
        assert_eq!(track.source_url(), "blob:https://host/0e4c");
        assert!((track.offset() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn automatic_selection() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        let first = state
            .load_track(&TrackSource::from_url("first.srt"), SRT, false)
            .unwrap();
        assert!(state.selected_track().is_none());

        state.enable_subtitles();
        assert_eq!(state.selected_track().map(Track::id), Some(first));

        let second = state
            .load_track(&TrackSource::from_url("second.srt"), SRT, false)
            .unwrap();
        assert_eq!(state.selected_track().map(Track::id), Some(first));
        assert!(state.select_by_url("second.srt"));
        assert_eq!(state.selected_track().map(Track::id), Some(second));
        assert!(!state.select_by_url("third.srt"));
    }

    #[test]
    fn tick_is_idempotent() {
        let mut state = recording_state(&PlayerConfig::default());
        state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();

        assert_eq!(state.tick(1.5), CaptionChange::Updated);
        assert_eq!(state.tick(1.5), CaptionChange::Unchanged);
        assert_eq!(state.tick(1.9), CaptionChange::Unchanged);
        assert_eq!(state.caption().text(), "Hello");
        assert!(state.caption().visible());

        assert_eq!(state.tick(2.5), CaptionChange::Hidden);
        assert_eq!(state.tick(2.6), CaptionChange::Unchanged);
        assert!(!state.caption().visible());
        assert_eq!(state.listener().captions.len(), 2);
    }

    #[test]
    fn invalid_times_are_ignored() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        state.tick(1.5);
        assert_eq!(state.tick(f64::NAN), CaptionChange::Unchanged);
        assert_eq!(state.tick(f64::INFINITY), CaptionChange::Unchanged);
        assert!((state.current_time() - 1.5).abs() < f64::EPSILON);
        assert_eq!(state.caption().text(), "Hello");
    }

    #[test]
    fn shift_moves_the_query_time() {
        let mut shifted = SubtitleState::new(&PlayerConfig::default());
        let mut plain = SubtitleState::new(&PlayerConfig::default());
        for state in [&mut shifted, &mut plain] {
            state
                .load_track(&TrackSource::from_url("a.srt"), SRT, true)
                .unwrap();
        }
        assert!(shifted.set_current_offset(2.));

        for time in [0., 0.5, 1.25, 1.75, 2.5, 3.] {
            shifted.tick(time);
            plain.tick(time + 2.);
            assert_eq!(shifted.caption(), plain.caption(), "at {time}");
        }
    }

    #[test]
    fn shift_recomputes_selected_track_only() {
        let mut state = recording_state(&PlayerConfig::default());
        let selected = state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        let other = state
            .load_track(&TrackSource::from_url("b.srt"), SRT, false)
            .unwrap();
        state.tick(0.5);
        assert!(state.listener().captions.is_empty());

        assert!(state.shift_offset(other, 1.));
        assert!(state.listener().captions.is_empty());
        assert!((state.offset_by_url("b.srt") - 1.).abs() < f64::EPSILON);

        assert!(state.shift_offset(selected, 0.5));
        assert!(state.shift_current_offset(0.5));
        assert_eq!(state.caption().text(), "Hello");
        assert!((state.current_offset() - 1.).abs() < f64::EPSILON);

        assert!(!state.set_offset(selected, f64::NAN));
        assert!(state.set_offset_by_url("a.srt", 0.));
        assert!(!state.caption().visible());
        assert_eq!(state.offset(selected), Some(0.));
        assert!(state.offset_by_url("missing.srt").abs() < f64::EPSILON);
    }

    #[test]
    fn cue_overlap() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        state
            .load_track(&TrackSource::from_url("a.vtt"), OVERLAP_VTT, true)
            .unwrap();
        state.tick(3.);
        assert_eq!(state.active_cues().len(), 2);
        assert_eq!(state.caption().text(), "Second\nFirst");

        let config = PlayerConfig::builder()
            .with_cue_overlap(false)
            .build()
            .unwrap();
        let mut state = SubtitleState::new(&config);
        state
            .load_track(&TrackSource::from_url("a.vtt"), OVERLAP_VTT, true)
            .unwrap();
        state.tick(3.);
        assert_eq!(state.caption().text(), "First");
    }

    #[test]
    fn disabled_display_keeps_selection() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        let id = state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        state.set_current_offset(0.25);
        state.tick(1.5);
        assert!(state.caption().visible());

        state.disable_subtitles();
        assert!(!state.caption().visible());
        state.tick(3.5);
        assert!(!state.caption().visible());
        assert_eq!(state.caption().text(), "<i>World</i>");
        assert_eq!(state.selected_track().map(Track::id), Some(id));
        assert_eq!(state.offset(id), Some(0.25));

        state.enable_subtitles();
        assert!(state.caption().visible());
        assert_eq!(state.caption().text(), "<i>World</i>");
    }

    #[test]
    fn switching_track_resets_display() {
        let mut state = recording_state(&PlayerConfig::default());
        state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        let late = state
            .load_track(
                &TrackSource::from_url("late.srt").with_offset(-10.),
                SRT,
                false,
            )
            .unwrap();
        state.tick(1.5);
        assert!(state.caption().visible());

        assert!(state.enable_track(late));
        assert!(!state.caption().visible());
        assert!(state.active_cues().is_empty());

        state.tick(11.5);
        assert_eq!(state.caption().text(), "Hello");
    }

    #[test]
    fn removal() {
        let mut state = SubtitleState::new(&PlayerConfig::default());
        let a = state
            .load_track(&TrackSource::from_url("a.srt"), SRT, true)
            .unwrap();
        let b = state
            .load_track(&TrackSource::from_url("b.srt"), SRT, false)
            .unwrap();
        state.tick(1.5);

        assert!(state.remove_track(b).is_some());
        assert!(state.caption().visible());
        assert!(state.remove_track(b).is_none());

        let removed = state.remove_by_url("a.srt").unwrap();
        assert_eq!(removed.id(), a);
        assert!(state.selected_track().is_none());
        assert!(!state.caption().visible());
        assert!(state.active_cues().is_empty());
        assert_eq!(state.tick(1.5), CaptionChange::Unchanged);

        state
            .load_track(&TrackSource::from_url("c.srt"), SRT, true)
            .unwrap();
        assert!(state.remove_at(1).is_none());
        assert!(state.any_track_match(|track| track.name() == "c.srt"));
        state.clear_all();
        assert!(state.tracks().is_empty());
        assert!(!state.any_track_match(|_| true));
    }
}
