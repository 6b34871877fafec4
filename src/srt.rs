//! `SubRip`/`Srt` functionality
use crate::{
    cue::Cue,
    parser::{parse_cues, CueLayout},
    time::DecimalMark,
};

/// Block layout of a `SubRip` file: a counter line, a timestamp line using `,` and the text.
pub const SRT_LAYOUT: CueLayout = CueLayout {
    decimal_mark: DecimalMark::Comma,
    counter_line: true,
    header_lines: 0,
};

/// Parse the content of a `.srt` file.
#[must_use]
pub fn parse_srt(text: &str) -> Vec<Cue> {
    parse_cues(text, SRT_LAYOUT)
}

#[cfg(test)]
mod tests {
    use super::parse_srt;
    use crate::time::TimeSpan;

    #[test]
    fn parse_two_cues() {
        let cues = parse_srt(
            "1\n00:00:01,000 --> 00:00:03,000\nHello\n\n2\n00:00:04,000 --> 00:00:05,000\nWorld\n",
        );
        assert_eq!(cues.len(), 2);
        assert_eq!(*cues[0].span(), TimeSpan::from_secs(1., 3.));
        assert_eq!(cues[0].text(), "Hello");
        assert_eq!(*cues[1].span(), TimeSpan::from_secs(4., 5.));
        assert_eq!(cues[1].text(), "World");
    }

    #[test]
    fn vtt_timestamps_are_rejected() {
        assert!(parse_srt("1\n00:00:01.000 --> 00:00:03.000\nHello\n").is_empty());
    }
}
