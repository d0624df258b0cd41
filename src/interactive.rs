//! Prompt-driven calculator sessions
//!
//! Reads answers line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so sessions run the same against a terminal or
//! an in-memory buffer.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::calculator::{CalculatorService, EphRequest};
use crate::error::CalcError;
use crate::locale::Translations;
use crate::models::CalculationMode;
use crate::report::TrackReport;
use crate::track::{parse_distance, parse_pace};

pub struct InteractiveSession<'a, R, W> {
    input: R,
    output: W,
    service: CalculatorService<'a>,
    default_mode: CalculationMode,
}

impl<'a, R: BufRead, W: Write> InteractiveSession<'a, R, W> {
    pub fn new(input: R, output: W, service: CalculatorService<'a>) -> Self {
        Self {
            input,
            output,
            service,
            default_mode: CalculationMode::Eph,
        }
    }

    pub fn with_default_mode(mut self, mode: CalculationMode) -> Self {
        self.default_mode = mode;
        self
    }

    fn translations(&self) -> &'a Translations {
        self.service.translations()
    }

    /// Print a prompt and read one trimmed line; end of input is an error
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{} ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before '{}' was answered", label.trim_end_matches([':', '：']));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until the answer parses as a finite number
    fn prompt_number(&mut self, label: &str) -> Result<f64> {
        loop {
            let answer = self.prompt(label)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => writeln!(self.output, "{}", self.translations().error_invalid)?,
            }
        }
    }

    /// Choose a mode, gather its inputs and print the result
    ///
    /// Returns whether the calculation succeeded.
    pub fn run_effort(&mut self) -> Result<bool> {
        let t = self.translations();
        writeln!(self.output, "{}", t.eph_title)?;
        writeln!(self.output, "1. {}", t.mode_eph)?;
        writeln!(self.output, "2. {}", t.mode_time)?;

        let mode = loop {
            let choice = self.prompt(t.mode_label)?;
            match choice.as_str() {
                "" => break self.default_mode,
                "1" => break CalculationMode::Eph,
                "2" => break CalculationMode::Time,
                other => match other.parse::<CalculationMode>() {
                    Ok(mode) => break mode,
                    Err(_) => writeln!(self.output, "{}", t.error_mode)?,
                },
            }
        };
        debug!(%mode, "Interactive mode selected");

        let distance = self.prompt_number(t.distance_label)?;
        let elevation = self.prompt_number(t.elevation_label)?;

        let mut request = EphRequest {
            mode: mode.to_string(),
            distance,
            elevation,
            time: None,
            eph: None,
        };
        match mode {
            CalculationMode::Eph => request.time = Some(self.prompt(t.time_label)?),
            CalculationMode::Time => request.eph = Some(self.prompt_number(t.eph_label)?),
        }

        let response = self.service.handle_eph(&request);
        match &response.error {
            None => {
                writeln!(self.output, "{}", self.service.total_ep(distance, elevation))?;
                writeln!(self.output, "{}", response.result)?;
                Ok(true)
            }
            Some(error) => {
                writeln!(self.output, "{}", error)?;
                Ok(false)
            }
        }
    }

    /// Ask for a pace (and optionally a distance) and print the track report
    pub fn run_track(&mut self) -> Result<bool> {
        let t = self.translations();
        writeln!(self.output, "{}", t.track_title)?;

        let seconds_per_km = loop {
            let answer = self.prompt(t.pace_label)?;
            match parse_pace(&answer) {
                Ok(seconds) => break seconds,
                Err(err) => writeln!(self.output, "{}", t.calc_error(&CalcError::from(err)))?,
            }
        };

        let distance_km = loop {
            let answer = self.prompt(t.track_distance_label)?;
            if answer.is_empty() {
                break None;
            }
            match parse_distance(&answer) {
                Ok(km) => break Some(km),
                Err(err) => writeln!(self.output, "{}", t.calc_error(&CalcError::from(err)))?,
            }
        };

        match TrackReport::build(seconds_per_km, true, distance_km) {
            Ok(report) => {
                writeln!(self.output)?;
                report.write_text(&mut self.output, t)?;
                Ok(true)
            }
            Err(err) => {
                writeln!(self.output, "{}", t.calc_error(&err))?;
                Ok(false)
            }
        }
    }
}
