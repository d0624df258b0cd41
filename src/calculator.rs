//! Form-style request handling shared by every front end
//!
//! Requests carry raw field values the way a form submission or a prompt
//! would deliver them. Responses always come back as a value: failures are
//! reported through the `error` field in the caller's language instead of
//! being raised.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::duration::{format_hours_as_hms, parse_time_string};
use crate::effort::{compute_ep, compute_eph, compute_required_hours};
use crate::error::CalcError;
use crate::locale::Translations;
use crate::models::CalculationMode;
use crate::track::{compute_splits, parse_pace};

/// Default number of decimals for EpH and EP results
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// EpH form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphRequest {
    /// `eph` or `time`
    pub mode: String,
    pub distance: f64,
    pub elevation: f64,
    /// Elapsed time, read in `eph` mode
    #[serde(default)]
    pub time: Option<String>,
    /// Target EpH, read in `time` mode
    #[serde(default)]
    pub eph: Option<f64>,
}

/// EpH form result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphResponse {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EphResponse {
    fn success(result: String) -> Self {
        Self { result, error: None }
    }

    fn failure(message: &str) -> Self {
        Self {
            result: String::new(),
            error: Some(message.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Track form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceRequest {
    pub pace: String,
}

/// Track form result; every numeric field is zero on error
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaceResponse {
    /// Lap time as `M:SS`
    pub total_time_min: String,
    pub total_time_sec: u32,
    pub split_100m: u32,
    pub split_200m: u32,
    pub split_300m: u32,
    pub split_400m: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PaceResponse {
    fn failure(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Handles calculator requests for one language
#[derive(Debug, Clone, Copy)]
pub struct CalculatorService<'a> {
    translations: &'a Translations,
    decimal_places: usize,
}

impl<'a> CalculatorService<'a> {
    pub fn new(translations: &'a Translations) -> Self {
        Self {
            translations,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }

    pub fn with_decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn translations(&self) -> &'a Translations {
        self.translations
    }

    /// Total EP line, e.g. `Total EP: 15.80`
    pub fn total_ep(&self, distance: f64, elevation: f64) -> String {
        format!(
            "{}: {:.*}",
            self.translations.total_ep_prefix,
            self.decimal_places,
            compute_ep(distance, elevation)
        )
    }

    /// Solve an EpH form for whichever quantity `mode` asks for
    pub fn handle_eph(&self, request: &EphRequest) -> EphResponse {
        let t = self.translations;
        debug!(
            mode = %request.mode,
            distance = request.distance,
            elevation = request.elevation,
            "Handling EpH request"
        );

        let mode = match request.mode.parse::<CalculationMode>() {
            Ok(mode) => mode,
            Err(_) => {
                warn!(mode = %request.mode, "Rejected EpH request with unknown mode");
                return EphResponse::failure(t.error_mode);
            }
        };

        if !request.distance.is_finite() || !request.elevation.is_finite() {
            warn!("Rejected EpH request with non-numeric distance or elevation");
            return EphResponse::failure(t.error_invalid);
        }

        let outcome = match mode {
            CalculationMode::Eph => {
                let time = match request.time.as_deref().map(str::trim) {
                    Some(time) if !time.is_empty() => time,
                    _ => return EphResponse::failure(t.error_time_required),
                };
                self.eph_result(request.distance, request.elevation, time)
            }
            CalculationMode::Time => {
                // A zero target counts as missing
                let eph = match request.eph {
                    Some(eph) if eph != 0.0 => eph,
                    _ => return EphResponse::failure(t.error_eph_required),
                };
                self.time_result(request.distance, request.elevation, eph)
            }
        };

        match outcome {
            Ok(result) => {
                debug!(%mode, %result, "EpH request solved");
                EphResponse::success(result)
            }
            Err(err) => {
                warn!(%mode, error = %err, "EpH request failed");
                EphResponse::failure(t.calc_error(&err))
            }
        }
    }

    fn eph_result(&self, distance: f64, elevation: f64, time: &str) -> Result<String, CalcError> {
        let hours = parse_time_string(time)?;
        let eph = compute_eph(distance, elevation, hours)?;
        Ok(format!(
            "{} = {:.*}",
            self.translations.result_eph_prefix, self.decimal_places, eph
        ))
    }

    fn time_result(&self, distance: f64, elevation: f64, eph: f64) -> Result<String, CalcError> {
        let hours = compute_required_hours(distance, elevation, eph)?;
        Ok(format!(
            "{} = {}",
            self.translations.result_time_prefix,
            format_hours_as_hms(hours)
        ))
    }

    /// Lap time and splits for a pace string
    pub fn handle_pace(&self, request: &PaceRequest) -> PaceResponse {
        debug!(pace = %request.pace, "Handling pace request");

        let seconds_per_km = match parse_pace(&request.pace) {
            Ok(seconds) => seconds,
            Err(err) => {
                warn!(pace = %request.pace, error = %err, "Pace request failed");
                return PaceResponse::failure(self.translations.calc_error(&CalcError::from(err)));
            }
        };

        let splits = compute_splits(seconds_per_km);
        PaceResponse {
            total_time_min: splits.total_time_min(),
            total_time_sec: splits.split_400,
            split_100m: splits.split_100,
            split_200m: splits.split_200,
            split_300m: splits.split_300,
            split_400m: splits.split_400,
            error: None,
        }
    }
}
