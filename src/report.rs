//! Plain-text and JSON rendering of track results

use serde::Serialize;
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::CalcResult;
use crate::locale::Translations;
use crate::track::{
    compute_splits, format_elapsed, format_lap_time, format_min_sec, format_pace, format_race_time,
    plan_laps, project_races, LapPlan, RaceProjections, TrackSplits,
};

/// Everything the track calculator can say about one pace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackReport {
    /// Pace as `M:SS` per kilometer
    pub pace: String,
    pub seconds_per_km: u32,
    pub splits: TrackSplits,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub races: Option<RaceProjections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub laps: Option<LapPlan>,
}

impl TrackReport {
    pub fn build(seconds_per_km: u32, with_races: bool, distance_km: Option<f64>) -> CalcResult<Self> {
        let laps = distance_km
            .map(|km| plan_laps(seconds_per_km, km))
            .transpose()?;

        Ok(Self {
            pace: format_pace(seconds_per_km),
            seconds_per_km,
            splits: compute_splits(seconds_per_km),
            races: with_races.then(|| project_races(seconds_per_km)),
            laps,
        })
    }

    pub fn write_text<W: Write>(&self, out: &mut W, t: &Translations) -> io::Result<()> {
        write_splits(out, t, &self.splits)?;
        if let Some(races) = &self.races {
            writeln!(out)?;
            write_races(out, t, races)?;
        }
        if let Some(plan) = &self.laps {
            writeln!(out)?;
            write_lap_plan(out, t, plan)?;
        }
        Ok(())
    }
}

fn seconds_cell(seconds: u32) -> String {
    format_min_sec(seconds / 60, seconds % 60)
}

/// Lap time followed by a table of the 100 m marks
pub fn write_splits<W: Write>(out: &mut W, t: &Translations, splits: &TrackSplits) -> io::Result<()> {
    writeln!(out, "{} {}", t.total_time_label, splits.total_time_min())?;
    writeln!(out, "{}", t.splits_title)?;

    let mut builder = Builder::default();
    for (label, seconds) in [
        (t.split_100m, splits.split_100),
        (t.split_200m, splits.split_200),
        (t.split_300m, splits.split_300),
        (t.split_400m, splits.split_400),
    ] {
        builder.push_record([label.to_string(), format!("{}s", seconds), seconds_cell(seconds)]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    writeln!(out, "{}", table)
}

pub fn write_races<W: Write>(out: &mut W, t: &Translations, races: &RaceProjections) -> io::Result<()> {
    writeln!(out, "{}", t.races_title)?;
    writeln!(out, "  {}: {}", t.race_10k, format_race_time(races.ten_k))?;
    writeln!(out, "  {}: {}", t.race_half_marathon, format_race_time(races.half_marathon))?;
    writeln!(out, "  {}: {}", t.race_marathon, format_race_time(races.marathon))
}

pub fn write_lap_plan<W: Write>(out: &mut W, t: &Translations, plan: &LapPlan) -> io::Result<()> {
    writeln!(out, "{} {} km = {}", t.laps_title, plan.distance_km, format_elapsed(plan.total_seconds))?;

    if plan.full_laps > 0 {
        writeln!(out, "  {} {}", t.full_laps_label, plan.full_laps)?;
        if plan.remaining_meters > 0 {
            writeln!(out, "  {} {}m", t.remaining_meters_label, plan.remaining_meters)?;
        }
        writeln!(out, "  {} {}", t.lap_time_label, format_lap_time(plan.lap_seconds))?;
    }
    writeln!(out, "  {} {}", t.hundred_time_label, format_lap_time(plan.hundred_seconds))?;

    for (index, elapsed) in plan.lap_splits().enumerate() {
        writeln!(out, "  {} {}: {}", t.lap_label, index + 1, format_elapsed(elapsed))?;
    }
    Ok(())
}
