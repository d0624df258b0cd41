// Library interface for ephcalc
// The binary and the integration tests both go through these modules

pub mod calculator;
pub mod config;
pub mod duration;
pub mod effort;
pub mod error;
pub mod interactive;
pub mod locale;
pub mod logging;
pub mod models;
pub mod report;
pub mod track;

// Re-export commonly used types for convenience
pub use models::*;
pub use calculator::{CalculatorService, EphRequest, EphResponse, PaceRequest, PaceResponse};
pub use duration::{format_hours_as_hms, parse_time_string};
pub use effort::{compute_ep, compute_eph, compute_required_hours, EffortCalculator};
pub use error::{CalcError, CalcResult, DomainError, EphCalcError, FormatError, Result};
pub use locale::{Language, Translations};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use track::{compute_splits, parse_pace, plan_laps, project_races, LapPlan, RaceProjections, TrackSplits};
