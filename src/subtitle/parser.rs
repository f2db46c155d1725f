//! Parses raw SRT text into ordered subtitle entries.

use crate::subtitle::timecode::{self, TimecodeError};
use crate::types::SubtitleEntry;
use thiserror::Error;

/// Separator between the start and end timestamps on a cue's time line
pub const TIME_SEPARATOR: &str = " --> ";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("time line '{0}' lacks the ' --> ' separator")]
    MissingSeparator(String),
    #[error("invalid cue timestamp: {0}")]
    BadTimestamp(#[from] TimecodeError),
    #[error("cue starts at {start} but ends earlier at {end}")]
    InvertedTiming { start: String, end: String },
}

/// Parse one chunk's raw SRT text into ordered entries.
///
/// Blocks are separated by blank lines. A block with fewer than three
/// non-empty lines is a malformed or trailing artifact and is skipped, not
/// an error. The first line of a valid block (the source index) is
/// discarded; the assembler renumbers globally. Lines after the time line
/// are joined with `\n`, preserving multi-line cue text.
///
/// Empty input (a silent chunk) parses to zero entries without error.
pub fn parse_srt(raw: &str) -> Result<Vec<SubtitleEntry>, ParseError> {
    let normalized = raw.replace("\r\n", "\n");
    let mut entries = Vec::new();

    for block in normalized.split("\n\n") {
        let lines: Vec<&str> = block.trim().lines().map(str::trim_end).collect();
        if lines.iter().filter(|line| !line.is_empty()).count() < 3 {
            continue;
        }

        let time_line = lines[1];
        let (start_raw, end_raw) = time_line
            .split_once(TIME_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator(time_line.to_string()))?;
        let start_ms = timecode::parse_timestamp(start_raw)?;
        let end_ms = timecode::parse_timestamp(end_raw)?;
        if start_ms > end_ms {
            return Err(ParseError::InvertedTiming {
                start: start_raw.trim().to_string(),
                end: end_raw.trim().to_string(),
            });
        }

        entries.push(SubtitleEntry {
            start_ms,
            end_ms,
            text: lines[2..].join("\n"),
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_block() {
        let entries = parse_srt("1\n00:00:01,000 --> 00:00:02,000\nhello\n\n").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start_ms, 1_000);
        assert_eq!(entries[0].end_ms, 2_000);
        assert_eq!(entries[0].text, "hello");
    }

    #[test]
    fn test_skips_trailing_two_line_block() {
        let raw = "1\n00:00:01,000 --> 00:00:02,000\nhello\n\n2\n00:00:03,000\n\n";
        let entries = parse_srt(raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "hello");
    }

    #[test]
    fn test_preserves_multi_line_text() {
        let raw = "1\n00:00:01,000 --> 00:00:04,000\nline one\nline two\nline three\n\n";
        let entries = parse_srt(raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "line one\nline two\nline three");
    }

    #[test]
    fn test_source_index_is_discarded() {
        // The index line is not validated; renumbering happens downstream
        let entries = parse_srt("999\n00:00:01,000 --> 00:00:02,000\nhello\n\n").unwrap();
        assert_eq!(entries.len(), 1);

        let entries = parse_srt("not a number\n00:00:01,000 --> 00:00:02,000\nhello\n\n").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_empty_input_parses_to_no_entries() {
        assert!(parse_srt("").unwrap().is_empty());
        assert!(parse_srt("\n\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_handles_crlf_line_endings() {
        let raw = "1\r\n00:00:01,000 --> 00:00:02,000\r\nhello\r\n\r\n";
        let entries = parse_srt(raw).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "hello");
    }

    #[test]
    fn test_missing_separator_is_an_error() {
        let raw = "1\n00:00:01,000 -> 00:00:02,000\nhello\n\n";
        let result = parse_srt(raw);

        assert!(matches!(result, Err(ParseError::MissingSeparator(_))));
    }

    #[test]
    fn test_bad_timestamp_is_an_error() {
        let raw = "1\n00:00:01,000 --> later\nhello\n\n";
        let result = parse_srt(raw);

        assert!(matches!(result, Err(ParseError::BadTimestamp(_))));
    }

    #[test]
    fn test_inverted_timing_is_an_error() {
        let raw = "1\n00:00:05,000 --> 00:00:02,000\nhello\n\n";
        let result = parse_srt(raw);

        assert!(matches!(result, Err(ParseError::InvertedTiming { .. })));
    }

    #[test]
    fn test_multiple_blocks_keep_source_order() {
        let raw = "\
1
00:00:01,000 --> 00:00:02,000
first

2
00:00:03,000 --> 00:00:04,000
second

";
        let entries = parse_srt(raw).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "first");
        assert_eq!(entries[1].text, "second");
    }
}
