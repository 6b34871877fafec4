//! Loaded subtitle tracks.

use compact_str::CompactString;
use std::fmt;
use thiserror::Error;

use crate::{cue::Cue, srt::parse_srt, webvtt::parse_vtt};

/// Error when a subtitle resource can't become a track.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file extension is not a supported subtitle format.
    #[error("Unsupported subtitle extension '{extension}'")]
    UnsupportedFormat {
        /// Extension of the rejected resource
        extension: CompactString,
    },

    /// The resource was parsed but didn't contain any cue.
    #[error("No cue found in subtitle '{name}'")]
    EmptyTrack {
        /// Name of the rejected resource
        name: CompactString,
    },
}

/// Text subtitle formats handled by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    /// `SubRip` (`.srt`)
    Srt,
    /// `WebVTT` (`.vtt`)
    Vtt,
}

impl SubtitleFormat {
    /// Find the format from a file extension, case insensitive.
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("srt") {
            Some(Self::Srt)
        } else if extension.eq_ignore_ascii_case("vtt") {
            Some(Self::Vtt)
        } else {
            None
        }
    }

    /// The file extension of the format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }

    /// Parse a subtitle file content in this format.
    #[must_use]
    pub fn parse(self, text: &str) -> Vec<Cue> {
        match self {
            Self::Srt => parse_srt(text),
            Self::Vtt => parse_vtt(text),
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// File name and lower-cased extension of a subtitle resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    filename: CompactString,
    extension: CompactString,
}

impl FileInfo {
    /// Create from explicit values, the extension is lower-cased.
    #[must_use]
    pub fn new(filename: &str, extension: &str) -> Self {
        Self {
            filename: filename.into(),
            extension: extension.to_ascii_lowercase().into(),
        }
    }

    /// Extract the file name and extension from the last path segment of an url or path.
    /// Query string and fragment are ignored.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let path = url.split(&['?', '#'][..]).next().unwrap_or_default();
        let filename = path.rsplit(&['/', '\\'][..]).next().unwrap_or_default();
        let extension = filename.rsplit_once('.').map_or("", |(_, ext)| ext);
        Self::new(filename, extension)
    }

    /// Replace the file name, used as display name of the track.
    #[must_use]
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.into();
        self
    }

    /// Name of the file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Lower-cased extension.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Format matching the extension, if supported.
    #[must_use]
    pub fn format(&self) -> Option<SubtitleFormat> {
        SubtitleFormat::from_extension(&self.extension)
    }
}

/// Handle on a track owned by a [`SubtitleState`](crate::state::SubtitleState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(u64);

impl TrackId {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A loaded subtitle resource: its cues, metadata and time shift.
#[derive(Debug, Clone)]
pub struct Track {
    id: TrackId,
    cues: Vec<Cue>,
    name: CompactString,
    format: SubtitleFormat,
    source_url: String,
    offset: f64,
}

impl Track {
    pub(crate) fn new(
        id: TrackId,
        cues: Vec<Cue>,
        name: &str,
        format: SubtitleFormat,
        source_url: &str,
        offset: f64,
    ) -> Self {
        Self {
            id,
            cues,
            name: name.into(),
            format,
            source_url: source_url.into(),
            offset,
        }
    }

    /// Handle of the track.
    #[must_use]
    pub const fn id(&self) -> TrackId {
        self.id
    }

    /// Cues of the track, sorted by start time.
    #[must_use]
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format the track was parsed from.
    #[must_use]
    pub const fn format(&self) -> SubtitleFormat {
        self.format
    }

    /// Url the track was loaded from.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Time shift in seconds added to the playback time before cue lookup.
    /// Positive shows later cues earlier.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }
}
