//! Line oriented parsing shared by `SubRip` and `WebVTT`.

use log::{debug, trace};

use crate::{
    cue::Cue,
    time::{parse_timestamp_range, DecimalMark},
};

/// Describe the block layout of a line oriented subtitle format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueLayout {
    /// Mark between seconds and milliseconds in timestamps.
    pub decimal_mark: DecimalMark,
    /// A numeric counter line precede each timestamp line.
    pub counter_line: bool,
    /// Number of lines of file header to skip.
    pub header_lines: usize,
}

/// Parse a whole subtitle file into cues, in file order.
///
/// Blocks with a malformed timestamp line are skipped: the parser moves one line
/// forward and retries. A cue is only emitted when it has some text.
/// The parser never fails, malformed input only gives fewer cues.
#[profiling::function]
#[must_use]
pub fn parse_cues(text: &str, layout: CueLayout) -> Vec<Cue> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines = text.split('\n').map(str::trim).collect::<Vec<_>>();

    let mut cues = Vec::new();
    let mut skipped = 0_usize;
    let mut idx = layout.header_lines;
    while idx < lines.len() {
        if layout.counter_line {
            idx += 1;
        }
        // A timestamp line needs at least one line of text after it.
        if idx + 1 >= lines.len() {
            break;
        }

        let span = match parse_timestamp_range(lines[idx], layout.decimal_mark) {
            Ok(span) => span,
            Err(err) => {
                trace!("Skip line {}: {err}", idx + 1);
                skipped += 1;
                idx += 1;
                continue;
            }
        };

        idx += 1;
        let text_start = idx;
        while idx < lines.len() && !lines[idx].is_empty() {
            idx += 1;
        }
        let content = lines[text_start..idx].join("\n");
        if !content.is_empty() {
            cues.push(Cue::new(span, content));
        }
        // step over the blank line ending the block
        idx += 1;
    }

    if skipped > 0 {
        debug!("{skipped} malformed timestamp line(s) skipped");
    }
    cues
}
