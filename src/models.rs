use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::duration;
use crate::error::FormatError;
use crate::track;

/// Distance and climbing for one activity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityInput {
    /// Horizontal distance in kilometers
    pub distance_km: f64,

    /// Total elevation gain in meters
    pub elevation_gain_m: f64,
}

impl ActivityInput {
    pub fn new(distance_km: f64, elevation_gain_m: f64) -> Self {
        Self {
            distance_km,
            elevation_gain_m,
        }
    }

    /// Effort Points for this activity
    pub fn effort_points(&self) -> f64 {
        crate::effort::compute_ep(self.distance_km, self.elevation_gain_m)
    }
}

/// Elapsed or required time, stored as decimal hours
///
/// Parsed from `H`, `H:MM` or `H:MM:SS` and displayed as zero-padded
/// `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeDuration {
    hours: f64,
}

impl TimeDuration {
    pub fn from_hours(hours: f64) -> Self {
        Self { hours }
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// Whole seconds, rounded the same way the display form is
    pub fn total_seconds(&self) -> i64 {
        duration::round_to_seconds(self.hours)
    }
}

impl FromStr for TimeDuration {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        duration::parse_time_string(s).map(Self::from_hours)
    }
}

impl fmt::Display for TimeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&duration::format_hours_as_hms(self.hours))
    }
}

/// Running pace in whole seconds per kilometer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaceValue {
    seconds_per_km: u32,
}

impl PaceValue {
    pub fn from_seconds_per_km(seconds_per_km: u32) -> Self {
        Self { seconds_per_km }
    }

    pub fn seconds_per_km(&self) -> u32 {
        self.seconds_per_km
    }
}

impl FromStr for PaceValue {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        track::parse_pace(s).map(Self::from_seconds_per_km)
    }
}

impl fmt::Display for PaceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&track::format_pace(self.seconds_per_km))
    }
}

/// Which quantity a calculation solves for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Effort Points per Hour from distance, climb and elapsed time
    Eph,
    /// Required time from distance, climb and a target EpH
    Time,
}

impl FromStr for CalculationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eph" => Ok(CalculationMode::Eph),
            "time" => Ok(CalculationMode::Time),
            _ => Err(format!("Invalid calculation mode: {}", s)),
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMode::Eph => write!(f, "eph"),
            CalculationMode::Time => write!(f, "time"),
        }
    }
}

/// Outcome of an effort calculation, tagged by the mode that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum EffortResult {
    Eph(f64),
    Time(TimeDuration),
}

impl EffortResult {
    pub fn mode(&self) -> CalculationMode {
        match self {
            EffortResult::Eph(_) => CalculationMode::Eph,
            EffortResult::Time(_) => CalculationMode::Time,
        }
    }
}
