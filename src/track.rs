//! 400 m track pace and split calculations
//!
//! Converts a per-kilometer pace into the time for one lap of a standard
//! track, the 100/200/300 m marks within that lap, projected race finish
//! times, and a lap-by-lap plan for an arbitrary distance.

use serde::{Deserialize, Serialize};

use crate::duration::format_seconds_as_hms;
use crate::error::{CalcResult, DomainError, FormatError};

/// One lap of a standard track, in kilometers
pub const LAP_KM: f64 = 0.4;

/// Split marker spacing within a lap, in kilometers
pub const SPLIT_KM: f64 = 0.1;

/// Slowest pace accepted, in whole minutes per kilometer
pub const MAX_PACE_MINUTES: i64 = 60;

pub const TEN_K_KM: f64 = 10.0;
pub const HALF_MARATHON_KM: f64 = 21.0975;
pub const MARATHON_KM: f64 = 42.195;

/// Longest distance a lap plan is drawn up for
pub const MAX_PLAN_KM: f64 = 1000.0;

/// Times for one 400 m lap at a given pace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSplits {
    /// Exact lap time in seconds (pace * 0.4)
    pub total_400: f64,
    /// Whole seconds to the 100 m mark
    pub split_100: u32,
    /// Whole seconds to the 200 m mark
    pub split_200: u32,
    /// Whole seconds to the 300 m mark
    pub split_300: u32,
    /// Whole seconds for the full lap
    pub split_400: u32,
}

impl TrackSplits {
    /// Lap time as whole minutes and remaining whole seconds
    pub fn total_minutes_seconds(&self) -> (u32, u32) {
        let minutes = self.total_400.div_euclid(60.0) as u32;
        let seconds = self.total_400.rem_euclid(60.0) as u32;
        (minutes, seconds)
    }

    /// Lap time rendered as `M:SS`
    pub fn total_time_min(&self) -> String {
        let (minutes, seconds) = self.total_minutes_seconds();
        format_min_sec(minutes, seconds)
    }
}

/// Projected finish times, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceProjections {
    pub ten_k: u64,
    pub half_marathon: u64,
    pub marathon: u64,
}

/// Lap breakdown for running a distance at a steady pace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapPlan {
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Finish time in seconds
    pub total_seconds: f64,
    /// Complete 400 m laps in the distance
    pub full_laps: u32,
    /// Meters left over after the last full lap
    pub remaining_meters: u32,
    /// Seconds per 400 m lap
    pub lap_seconds: f64,
    /// Seconds per 100 m
    pub hundred_seconds: f64,
}

impl LapPlan {
    /// Elapsed time at the end of each full lap
    pub fn lap_splits(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.full_laps).scan(0.0, move |elapsed, _| {
            *elapsed += self.lap_seconds;
            Some(*elapsed)
        })
    }
}

/// Parse a pace of `M:SS` or `M` into seconds per kilometer
pub fn parse_pace(s: &str) -> Result<u32, FormatError> {
    let invalid = || FormatError::InvalidPace {
        input: s.to_string(),
    };
    let parse_int = |part: &str| part.trim().parse::<i64>().map_err(|_| invalid());

    let (minutes, seconds) = if s.contains(':') {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(sec), None) => (parse_int(m)?, Some(parse_int(sec)?)),
            _ => return Err(invalid()),
        }
    } else {
        (parse_int(s)?, None)
    };

    if minutes < 0 {
        return Err(FormatError::NegativeMinutes { minutes });
    }
    if minutes > MAX_PACE_MINUTES {
        return Err(FormatError::MinutesTooLarge { minutes });
    }
    let seconds = seconds.unwrap_or(0);
    if !(0..=59).contains(&seconds) {
        return Err(FormatError::SecondsOutOfRange { seconds });
    }

    // Bounded above by 60:59
    Ok((minutes * 60 + seconds) as u32)
}

/// Render seconds per kilometer as `M:SS`
pub fn format_pace(seconds_per_km: u32) -> String {
    format_min_sec(seconds_per_km / 60, seconds_per_km % 60)
}

/// Lap time and 100 m splits for a pace
///
/// The 200 m and 300 m marks are multiples of the already-truncated 100 m
/// split, so they can trail the exact value by up to two seconds.
pub fn compute_splits(seconds_per_km: u32) -> TrackSplits {
    let pace = f64::from(seconds_per_km);
    let total_400 = pace * LAP_KM;
    let split_100 = (pace * SPLIT_KM) as u32;

    TrackSplits {
        total_400,
        split_100,
        split_200: split_100 * 2,
        split_300: split_100 * 3,
        split_400: total_400 as u32,
    }
}

/// Finish times for 10 km, half marathon and marathon, rounded to the second
pub fn project_races(seconds_per_km: u32) -> RaceProjections {
    let pace = f64::from(seconds_per_km);
    RaceProjections {
        ten_k: (pace * TEN_K_KM).round() as u64,
        half_marathon: (pace * HALF_MARATHON_KM).round() as u64,
        marathon: (pace * MARATHON_KM).round() as u64,
    }
}

/// Parse a distance such as `3KM`, `8km` or `10` into kilometers
pub fn parse_distance(s: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidDistance {
        input: s.to_string(),
    };

    let cleaned = s.to_lowercase().replace("km", "");
    let km: f64 = cleaned.trim().parse().map_err(|_| invalid())?;
    if !km.is_finite() || km < 0.0 {
        return Err(invalid());
    }
    Ok(km)
}

/// Break a distance into 400 m laps at a steady pace
pub fn plan_laps(seconds_per_km: u32, distance_km: f64) -> CalcResult<LapPlan> {
    if distance_km.is_nan() || distance_km < 0.0 {
        return Err(DomainError::NegativeDistance { distance_km }.into());
    }
    if distance_km > MAX_PLAN_KM {
        return Err(DomainError::DistanceTooLarge {
            distance_km,
            max_km: MAX_PLAN_KM,
        }
        .into());
    }

    let pace = f64::from(seconds_per_km);
    let total_meters = distance_km * 1000.0;

    Ok(LapPlan {
        distance_km,
        total_seconds: pace * distance_km,
        full_laps: total_meters.div_euclid(400.0) as u32,
        remaining_meters: total_meters.rem_euclid(400.0) as u32,
        lap_seconds: pace * LAP_KM,
        hundred_seconds: pace * SPLIT_KM,
    })
}

/// `M:SS` with unpadded minutes
pub fn format_min_sec(minutes: u32, seconds: u32) -> String {
    format!("{}:{:02}", minutes, seconds)
}

/// Race time as `H:MM:SS` from one hour up, `M:SS` below
pub fn format_race_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Elapsed seconds truncated to `HH:MM:SS`
pub fn format_elapsed(seconds: f64) -> String {
    format_seconds_as_hms(seconds.trunc() as i64)
}

/// Lap-length times as `MM:SS`, or `HH:MM:SS` once past an hour
pub fn format_lap_time(seconds: f64) -> String {
    let whole = seconds.trunc() as i64;
    if whole >= 3600 {
        format_seconds_as_hms(whole)
    } else {
        format!("{:02}:{:02}", whole / 60, whole % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn test_parse_pace_formats() {
        assert_eq!(parse_pace("4:30").unwrap(), 270);
        assert_eq!(parse_pace("7").unwrap(), 420);
        assert_eq!(parse_pace("7:00").unwrap(), 420);
        assert_eq!(parse_pace("0:59").unwrap(), 59);
        assert_eq!(parse_pace("60:59").unwrap(), 3659);
        assert_eq!(parse_pace(" 5 : 15 ").unwrap(), 315);
    }

    #[test]
    fn test_parse_pace_range_errors() {
        assert_eq!(
            parse_pace("70").unwrap_err(),
            FormatError::MinutesTooLarge { minutes: 70 }
        );
        assert_eq!(
            parse_pace("61:00").unwrap_err(),
            FormatError::MinutesTooLarge { minutes: 61 }
        );
        assert_eq!(
            parse_pace("-1:30").unwrap_err(),
            FormatError::NegativeMinutes { minutes: -1 }
        );
        assert_eq!(
            parse_pace("4:60").unwrap_err(),
            FormatError::SecondsOutOfRange { seconds: 60 }
        );
        assert_eq!(
            parse_pace("4:-5").unwrap_err(),
            FormatError::SecondsOutOfRange { seconds: -5 }
        );
    }

    #[test]
    fn test_parse_pace_malformed() {
        for input in ["", "abc", "4:", ":30", "4:30:00", "4.5", "four"] {
            assert_eq!(
                parse_pace(input).unwrap_err(),
                FormatError::InvalidPace {
                    input: input.to_string()
                },
                "input {:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(270), "4:30");
        assert_eq!(format_pace(420), "7:00");
        assert_eq!(format_pace(59), "0:59");
    }

    #[test]
    fn test_splits_at_four_thirty() {
        let splits = compute_splits(270);
        assert_eq!(splits.total_400, 108.0);
        assert_eq!(splits.split_100, 27);
        assert_eq!(splits.split_200, 54);
        assert_eq!(splits.split_300, 81);
        assert_eq!(splits.split_400, 108);
        assert_eq!(splits.total_time_min(), "1:48");
    }

    #[test]
    fn test_splits_truncate_before_multiplying() {
        // 4:35/km: exact 100 m is 27.5 s, so 300 m reads 81 rather than 82
        let splits = compute_splits(275);
        assert_eq!(splits.split_100, 27);
        assert_eq!(splits.split_200, 54);
        assert_eq!(splits.split_300, 81);
        assert_eq!(splits.split_400, 110);
    }

    #[test]
    fn test_splits_fractional_lap() {
        let splits = compute_splits(271);
        assert!((splits.total_400 - 108.4).abs() < 1e-9);
        assert_eq!(splits.split_400, 108);
        assert_eq!(splits.total_minutes_seconds(), (1, 48));
    }

    #[test]
    fn test_race_projections() {
        let races = project_races(300);
        assert_eq!(races.ten_k, 3000);
        assert_eq!(races.half_marathon, 6329);
        assert_eq!(races.marathon, 12659);

        assert_eq!(format_race_time(races.ten_k), "50:00");
        assert_eq!(format_race_time(races.marathon), "3:30:59");
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("3KM").unwrap(), 3.0);
        assert_eq!(parse_distance("8km").unwrap(), 8.0);
        assert_eq!(parse_distance(" 10 ").unwrap(), 10.0);
        assert_eq!(parse_distance("1.6 Km").unwrap(), 1.6);

        assert!(parse_distance("ten km").is_err());
        assert!(parse_distance("-3km").is_err());
        assert!(parse_distance("inf").is_err());
    }

    #[test]
    fn test_lap_plan() {
        let plan = plan_laps(300, 1.0).unwrap();
        assert_eq!(plan.full_laps, 2);
        assert_eq!(plan.remaining_meters, 200);
        assert_eq!(plan.total_seconds, 300.0);
        assert_eq!(plan.lap_seconds, 120.0);

        let splits: Vec<f64> = plan.lap_splits().collect();
        assert_eq!(splits, vec![120.0, 240.0]);
        assert_eq!(format_elapsed(splits[1]), "00:04:00");
        assert_eq!(format_lap_time(plan.lap_seconds), "02:00");
    }

    #[test]
    fn test_lap_plan_rejects_negative_distance() {
        assert!(plan_laps(300, -1.0).unwrap_err().is_domain());
    }

    #[test]
    fn test_lap_plan_distance_limit() {
        let plan = plan_laps(300, MAX_PLAN_KM).unwrap();
        assert_eq!(plan.full_laps, 2500);

        let err = plan_laps(300, 1e12).unwrap_err();
        assert_eq!(
            err,
            CalcError::Domain(DomainError::DistanceTooLarge {
                distance_km: 1e12,
                max_km: MAX_PLAN_KM
            })
        );
    }
}
