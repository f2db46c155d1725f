//! SRT timestamp handling.
//!
//! Timestamps are held as total milliseconds elapsed and only rendered as
//! `HH:MM:SS,mmm` text at the parse/serialize boundary. Hours are not
//! clamped to a day, so timelines past 24:00:00 format without wrapping.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimecodeError {
    #[error("unrecognized timestamp '{0}', expected HH:MM:SS,mmm")]
    Unrecognized(String),
    #[error("shifting '{timestamp}' by {offset_seconds}s lands before the timeline start")]
    BeforeTimelineStart {
        timestamp: String,
        offset_seconds: i64,
    },
}

/// Parse an `HH:MM:SS,mmm` timestamp into total milliseconds
pub fn parse_timestamp(raw: &str) -> Result<i64, TimecodeError> {
    let trimmed = raw.trim();
    let err = || TimecodeError::Unrecognized(trimmed.to_string());

    let (hms, millis_raw) = trimmed.split_once(',').ok_or_else(err)?;
    let mut fields = hms.split(':');
    let (Some(hours_raw), Some(minutes_raw), Some(seconds_raw), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(err());
    };
    if millis_raw.len() != 3 {
        return Err(err());
    }

    let hours: i64 = hours_raw.parse().map_err(|_| err())?;
    let minutes: i64 = minutes_raw.parse().map_err(|_| err())?;
    let seconds: i64 = seconds_raw.parse().map_err(|_| err())?;
    let millis: i64 = millis_raw.parse().map_err(|_| err())?;
    if hours < 0
        || !(0..60).contains(&minutes)
        || !(0..60).contains(&seconds)
        || !(0..1000).contains(&millis)
    {
        return Err(err());
    }

    Ok(((hours * 60 + minutes) * 60 + seconds) * 1000 + millis)
}

/// Format total milliseconds as `HH:MM:SS,mmm`
pub fn format_timestamp(total_ms: i64) -> String {
    let total_ms = total_ms.max(0);
    let millis = total_ms % 1000;
    let total_seconds = total_ms / 1000;
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3600;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Shift a textual timestamp by a signed whole-second offset, preserving
/// millisecond precision.
///
/// Chunk offsets in the pipeline are always non-negative, but the operation
/// supports arbitrary signed offsets; a result below zero is an error rather
/// than a wrapped time of day.
pub fn shift_timestamp(raw: &str, offset_seconds: i64) -> Result<String, TimecodeError> {
    let shifted = parse_timestamp(raw)? + offset_seconds * 1000;
    if shifted < 0 {
        return Err(TimecodeError::BeforeTimelineStart {
            timestamp: raw.trim().to_string(),
            offset_seconds,
        });
    }
    Ok(format_timestamp(shifted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_timestamp() {
        assert_eq!(parse_timestamp("00:00:01,000").unwrap(), 1_000);
        assert_eq!(parse_timestamp("01:02:03,456").unwrap(), 3_723_456);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_timestamp(" 00:00:01,500 ").unwrap(), 1_500);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for raw in [
            "",
            "00:00:01",
            "00:00:01.000",
            "00:01,000",
            "00:00:00:01,000",
            "00:61:00,000",
            "00:00:61,000",
            "00:00:01,00",
            "00:00:01,0000",
            "aa:bb:cc,ddd",
        ] {
            assert!(
                parse_timestamp(raw).is_err(),
                "'{raw}' should not parse as a timestamp"
            );
        }
    }

    #[test]
    fn test_format_zero_pads_all_fields() {
        assert_eq!(format_timestamp(0), "00:00:00,000");
        assert_eq!(format_timestamp(3_723_456), "01:02:03,456");
    }

    #[test]
    fn test_format_does_not_wrap_past_24_hours() {
        // 25h 30m
        assert_eq!(format_timestamp(91_800_000), "25:30:00,000");
        // 3 days
        assert_eq!(format_timestamp(259_200_000), "72:00:00,000");
    }

    #[test]
    fn test_shift_adds_whole_seconds() {
        assert_eq!(shift_timestamp("00:00:01,000", 65).unwrap(), "00:01:06,000");
        assert_eq!(shift_timestamp("00:00:00,500", 0).unwrap(), "00:00:00,500");
    }

    #[test]
    fn test_shift_is_invertible() {
        let original = "01:23:45,678";
        for offset in [0, 1, 59, 3600, 86_400] {
            let forward = shift_timestamp(original, offset).unwrap();
            let back = shift_timestamp(&forward, -offset).unwrap();
            assert_eq!(back, original);
        }
    }

    #[test]
    fn test_shift_below_zero_is_rejected() {
        let result = shift_timestamp("00:00:01,000", -2);
        assert!(matches!(
            result,
            Err(TimecodeError::BeforeTimelineStart { .. })
        ));
    }
}
