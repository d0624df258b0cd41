//! Conversion between time strings and decimal hours
//!
//! Input accepts `H`, `H:MM` or `H:MM:SS`. Minutes and seconds are one or two
//! digits each and are not range-checked beyond that shape, so `1:75`
//! is read as one hour plus 75 minutes. Output is always zero-padded
//! `HH:MM:SS` with no wrap at 24 hours.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FormatError;

const SECONDS_PER_HOUR: f64 = 3600.0;

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)(?::([0-9]{1,2}))?(?::([0-9]{1,2}))?$")
        .expect("time pattern is a valid regex")
});

/// Parse `H`, `H:MM` or `H:MM:SS` into decimal hours
pub fn parse_time_string(s: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidTime {
        input: s.to_string(),
    };

    let captures = TIME_PATTERN.captures(s.trim()).ok_or_else(invalid)?;

    let component = |index: usize| -> Result<f64, FormatError> {
        match captures.get(index) {
            // Digit runs of any length parse as f64
            Some(m) => m.as_str().parse::<f64>().map_err(|_| invalid()),
            None => Ok(0.0),
        }
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;

    Ok(hours + minutes / 60.0 + seconds / SECONDS_PER_HOUR)
}

/// Round decimal hours to whole seconds, ties to even
pub fn round_to_seconds(hours: f64) -> i64 {
    // `as` saturates, and maps NaN to 0
    (hours * SECONDS_PER_HOUR).round_ties_even() as i64
}

/// Format decimal hours as zero-padded `HH:MM:SS`
///
/// Hours are not wrapped at 24 and grow past two digits when needed.
/// Negative durations keep a leading `-` on the magnitude.
pub fn format_hours_as_hms(hours: f64) -> String {
    format_seconds_as_hms(round_to_seconds(hours))
}

/// Format whole seconds as zero-padded `HH:MM:SS`
pub fn format_seconds_as_hms(total_seconds: i64) -> String {
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total = total_seconds.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time_string("3").unwrap(), 3.0);
        assert_eq!(parse_time_string("3:30").unwrap(), 3.5);
        assert_eq!(parse_time_string("3:30:00").unwrap(), 3.5);
        assert_eq!(parse_time_string("  1:15:36 ").unwrap(), 1.26);
        assert_eq!(parse_time_string("0:0:9").unwrap(), 9.0 / 3600.0);
    }

    #[test]
    fn test_parse_time_accepts_unchecked_ranges() {
        // Only the digit count is validated for minutes and seconds
        assert_eq!(parse_time_string("1:90").unwrap(), 2.5);
    }

    #[test]
    fn test_parse_time_accepts_hours_beyond_u64() {
        let hours = parse_time_string("100000000000000000000").unwrap();
        assert_eq!(hours, 1e20);

        assert!(parse_time_string("100000000000000000000:30:00").is_ok());
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        for input in ["abc", "", ":30", "3:", "3:300", "3:30:00:00", "-1", "1.5", "3 30"] {
            let err = parse_time_string(input).unwrap_err();
            assert_eq!(
                err,
                FormatError::InvalidTime {
                    input: input.to_string()
                },
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours_as_hms(3.5), "03:30:00");
        assert_eq!(format_hours_as_hms(0.0), "00:00:00");
        assert_eq!(format_hours_as_hms(148.9 / 4.51), "33:00:56");
        assert_eq!(format_hours_as_hms(125.25), "125:15:00");
    }

    #[test]
    fn test_format_rounds_ties_to_even() {
        // 0.5 s and 1.5 s land exactly on a tie
        assert_eq!(format_hours_as_hms(0.5 / 3600.0), "00:00:00");
        assert_eq!(format_hours_as_hms(1.5 / 3600.0), "00:00:02");
        assert_eq!(format_hours_as_hms(59.6 / 3600.0), "00:01:00");
    }

    #[test]
    fn test_format_negative_duration() {
        assert_eq!(format_hours_as_hms(-0.5), "-00:30:00");
    }

    proptest! {
        #[test]
        fn test_canonical_time_round_trip(h in 0u32..200, m in 0u32..60, s in 0u32..60) {
            let input = format!("{:02}:{:02}:{:02}", h, m, s);
            let hours = parse_time_string(&input).unwrap();
            prop_assert_eq!(format_hours_as_hms(hours), input);
        }
    }
}
