//! `WebVTT` functionality
use crate::{
    cue::Cue,
    parser::{parse_cues, CueLayout},
    time::DecimalMark,
};

/// Block layout of a `WebVTT` file: a 2 lines header (`WEBVTT` and a blank line),
/// then timestamp lines using `.` followed by the text.
pub const VTT_LAYOUT: CueLayout = CueLayout {
    decimal_mark: DecimalMark::Dot,
    counter_line: false,
    header_lines: 2,
};

/// Parse the content of a `.vtt` file.
///
/// Cue identifiers, `NOTE` and `STYLE` blocks are skipped as lines without timestamp.
#[must_use]
pub fn parse_vtt(text: &str) -> Vec<Cue> {
    parse_cues(text, VTT_LAYOUT)
}

#[cfg(test)]
mod tests {
    use super::parse_vtt;
    use crate::time::TimeSpan;

    #[test]
    fn parse_after_header() {
        let cues = parse_vtt("WEBVTT\n\n00:00:01.500 --> 00:00:02.500\nHi\n");
        assert_eq!(cues.len(), 1);
        assert_eq!(*cues[0].span(), TimeSpan::from_secs(1.5, 2.5));
        assert_eq!(cues[0].text(), "Hi");
    }

    #[test]
    fn skip_identifiers_and_notes() {
        let cues = parse_vtt(
            "WEBVTT\n\nNOTE a comment\n\nintro\n00:00:01.000 --> 00:00:02.000 line:0\n<i>one</i>\n\n\
             00:02.000 --> 00:03.000\ntwo\n",
        );
        let texts = cues.iter().map(|cue| cue.text()).collect::<Vec<_>>();
        assert_eq!(texts, ["<i>one</i>", "two"]);
        assert_eq!(*cues[1].span(), TimeSpan::from_secs(2., 3.));
    }
}
