//! This crate provides the subtitle timing engine of an in-page media player.
//!
//! It parses `SubRip` (`.srt`) and `WebVTT` (`.vtt`) files into cues, sanitizes cue markup,
//! finds the cues active at a playback time and keeps the track selection state of a player.
//! The player controls run on a single-threaded [`Timeline`] of throttling [`Scheduler`]s.
//!
//! ```
//! use subplay::{PlayerConfig, SubtitleState, TrackSource};
//!
//! let srt = "1\n00:00:01,500 --> 00:00:03,000\nHello\n";
//! let mut state = SubtitleState::new(&PlayerConfig::default());
//! state.load_track(&TrackSource::from_url("movie.srt"), srt, true)?;
//! state.tick(2.);
//! assert_eq!(state.caption().text(), "Hello");
//! # Ok::<(), subplay::SubplayError>(())
//! ```

#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod controls;
pub mod cue;
mod errors;
pub mod index;
pub mod parser;
pub mod sanitize;
pub mod scheduler;
pub mod srt;
pub mod state;
pub mod time;
pub mod track;
mod util;
pub mod webvtt;
pub mod widget;

pub use color::{ColorError, HexColor, LayerColor};
pub use config::{ConfigError, PlayerConfig, PlayerConfigBuilder};
pub use cue::Cue;
pub use errors::SubplayError;
pub use index::{find_active, find_active_cues, ActiveCues};
pub use scheduler::{Scheduler, Timeline};
pub use state::{Caption, CaptionChange, SubtitleListener, SubtitleState, TrackSource};
pub use time::{format_timestamp, TimePoint, TimeSpan};
pub use track::{FileInfo, LoadError, SubtitleFormat, Track, TrackId};
pub use util::NomError;
