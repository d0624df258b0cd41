//! Error hierarchy for ephcalc
//!
//! The formula engine only ever fails in two ways: a string that does not
//! parse ([`FormatError`]) or a divisor that is not positive
//! ([`DomainError`]). Both are wrapped by [`CalcError`]. The application
//! layer adds configuration and I/O failures on top in [`EphCalcError`].

use thiserror::Error;

/// Top-level error type for all ephcalc operations
#[derive(Debug, Error)]
pub enum EphCalcError {
    /// Calculation errors raised by the formula engine
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalcError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the formula engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Malformed time, pace or distance string
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Non-positive divisor or otherwise out-of-domain value
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Malformed input strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Time string is not `H`, `H:MM` or `H:MM:SS`
    #[error("Invalid time format: '{input}' (expected H, H:MM or H:MM:SS)")]
    InvalidTime { input: String },

    /// Pace string is not `M:SS` or `M`
    #[error("Invalid pace format: '{input}'. Use M:SS (e.g., 4:30) or M (e.g., 7)")]
    InvalidPace { input: String },

    /// Pace minutes below zero
    #[error("Minutes cannot be negative: {minutes}")]
    NegativeMinutes { minutes: i64 },

    /// Pace minutes above the 60 minute ceiling
    #[error("Minutes cannot exceed 60: {minutes}")]
    MinutesTooLarge { minutes: i64 },

    /// Pace seconds outside 0..=59
    #[error("Seconds must be between 0 and 59: {seconds}")]
    SecondsOutOfRange { seconds: i64 },

    /// Distance string is not a number with an optional `km` suffix
    #[error("Invalid distance format: '{input}'. Use a number optionally followed by km (e.g., 3KM, 8km)")]
    InvalidDistance { input: String },
}

/// Values outside the domain of a formula
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Elapsed time must be strictly positive to compute EpH
    #[error("Time must be greater than 0 (got {hours} hours)")]
    NonPositiveHours { hours: f64 },

    /// Target EpH must be strictly positive to compute required time
    #[error("EpH must be greater than 0 (got {eph})")]
    NonPositiveEph { eph: f64 },

    /// Lap plans need a distance of zero or more kilometers
    #[error("Distance cannot be negative (got {distance_km} km)")]
    NegativeDistance { distance_km: f64 },

    /// Lap plans stop at a fixed distance
    #[error("Distance cannot exceed {max_km} km (got {distance_km} km)")]
    DistanceTooLarge { distance_km: f64, max_km: f64 },
}

/// Result type alias for ephcalc operations
pub type Result<T> = std::result::Result<T, EphCalcError>;

/// Result type alias for formula engine operations
pub type CalcResult<T> = std::result::Result<T, CalcError>;

impl CalcError {
    /// True for malformed input strings
    pub fn is_format(&self) -> bool {
        matches!(self, CalcError::Format(_))
    }

    /// True for out-of-domain numeric input
    pub fn is_domain(&self) -> bool {
        matches!(self, CalcError::Domain(_))
    }
}

impl EphCalcError {
    /// Check if the user can fix the error by re-entering input
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EphCalcError::Calculation(_))
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EphCalcError::Calculation(_) => ErrorSeverity::Warning,
            EphCalcError::Configuration(_) => ErrorSeverity::Error,
            EphCalcError::Io(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}
