//! Effort Points (EP) and Effort Points per Hour (EpH)
//!
//! One kilometer on the flat and one hundred meters of climbing are each
//! worth one EP. EpH divides EP by the hours taken; the inverse divides EP
//! by a target EpH to get the hours required.

use crate::duration::parse_time_string;
use crate::error::{CalcResult, DomainError};
use crate::models::{ActivityInput, CalculationMode, EffortResult, TimeDuration};

/// Meters of climbing worth one EP
pub const METERS_PER_EP: f64 = 100.0;

/// Total EP for a distance and climb
///
/// Negative inputs are passed through unchanged.
pub fn compute_ep(distance_km: f64, elevation_m: f64) -> f64 {
    distance_km + elevation_m / METERS_PER_EP
}

/// EP per hour for an activity that took `hours`
pub fn compute_eph(distance_km: f64, elevation_m: f64, hours: f64) -> CalcResult<f64> {
    if hours.is_nan() || hours <= 0.0 {
        return Err(DomainError::NonPositiveHours { hours }.into());
    }
    Ok(compute_ep(distance_km, elevation_m) / hours)
}

/// Hours needed to cover an activity at a target EpH
pub fn compute_required_hours(distance_km: f64, elevation_m: f64, eph: f64) -> CalcResult<f64> {
    if eph.is_nan() || eph <= 0.0 {
        return Err(DomainError::NonPositiveEph { eph }.into());
    }
    Ok(compute_ep(distance_km, elevation_m) / eph)
}

/// Calculation entry points that speak in model types
pub struct EffortCalculator;

impl EffortCalculator {
    /// EpH from an elapsed time string (`H`, `H:MM` or `H:MM:SS`)
    pub fn eph_from_time_string(activity: &ActivityInput, time: &str) -> CalcResult<EffortResult> {
        let hours = parse_time_string(time)?;
        let eph = compute_eph(activity.distance_km, activity.elevation_gain_m, hours)?;
        Ok(EffortResult::Eph(eph))
    }

    /// Required time for a target EpH
    pub fn required_time(activity: &ActivityInput, eph: f64) -> CalcResult<EffortResult> {
        let hours = compute_required_hours(activity.distance_km, activity.elevation_gain_m, eph)?;
        Ok(EffortResult::Time(TimeDuration::from_hours(hours)))
    }

    /// Dispatch on mode; `time` is read for EpH mode and `eph` for time mode
    pub fn solve(
        mode: CalculationMode,
        activity: &ActivityInput,
        time: &str,
        eph: f64,
    ) -> CalcResult<EffortResult> {
        match mode {
            CalculationMode::Eph => Self::eph_from_time_string(activity, time),
            CalculationMode::Time => Self::required_time(activity, eph),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalcError, FormatError};
    use proptest::prelude::*;

    #[test]
    fn test_ep_definition() {
        assert_eq!(compute_ep(1.0, 0.0), 1.0);
        assert_eq!(compute_ep(0.0, 100.0), 1.0);
        assert_eq!(compute_ep(100.0, 4890.0), 148.9);
    }

    #[test]
    fn test_ep_accepts_negative_inputs() {
        assert_eq!(compute_ep(-2.0, 0.0), -2.0);
        assert_eq!(compute_ep(5.0, -200.0), 3.0);
    }

    #[test]
    fn test_eph_sample_hike() {
        // 9 km with 680 m of climbing in three and a half hours
        let eph = compute_eph(9.0, 680.0, 3.5).unwrap();
        assert!((eph - 4.514_285_714).abs() < 1e-6);
        assert_eq!(format!("{:.2}", eph), "4.51");
    }

    #[test]
    fn test_eph_rejects_non_positive_hours() {
        for hours in [0.0, -1.0, f64::NAN] {
            let err = compute_eph(9.0, 680.0, hours).unwrap_err();
            assert!(err.is_domain());
        }
    }

    #[test]
    fn test_required_hours() {
        let hours = compute_required_hours(100.0, 4890.0, 4.51).unwrap();
        assert_eq!(hours, 148.9 / 4.51);
        assert!((hours - 33.0155).abs() < 1e-4);
    }

    #[test]
    fn test_required_hours_rejects_non_positive_eph() {
        let err = compute_required_hours(10.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err, CalcError::Domain(DomainError::NonPositiveEph { eph: 0.0 }));
        assert!(compute_required_hours(10.0, 0.0, -4.5).is_err());
    }

    #[test]
    fn test_calculator_solve_modes() {
        let activity = ActivityInput::new(9.0, 680.0);

        let result = EffortCalculator::solve(CalculationMode::Eph, &activity, "3:30", 0.0).unwrap();
        match result {
            EffortResult::Eph(eph) => assert!((eph - 4.51).abs() < 0.01),
            other => panic!("expected EpH result, got {:?}", other),
        }

        let result = EffortCalculator::solve(CalculationMode::Time, &activity, "", 4.0).unwrap();
        assert_eq!(result, EffortResult::Time(TimeDuration::from_hours(15.8 / 4.0)));
    }

    #[test]
    fn test_calculator_time_string_errors() {
        let activity = ActivityInput::new(9.0, 680.0);

        let err = EffortCalculator::eph_from_time_string(&activity, "abc").unwrap_err();
        assert_eq!(
            err,
            CalcError::Format(FormatError::InvalidTime {
                input: "abc".to_string()
            })
        );

        // Parses fine but is zero hours
        let err = EffortCalculator::eph_from_time_string(&activity, "0:00").unwrap_err();
        assert!(err.is_domain());
    }

    proptest! {
        #[test]
        fn test_ep_identity(d in 0.0f64..500.0, e in 0.0f64..20_000.0) {
            prop_assert_eq!(compute_ep(d, e), d + e / 100.0);
        }

        #[test]
        fn test_eph_and_required_hours_are_inverse(
            d in 0.1f64..200.0,
            e in 0.0f64..10_000.0,
            hours in 0.1f64..72.0,
        ) {
            let eph = compute_eph(d, e, hours).unwrap();
            let back = compute_required_hours(d, e, eph).unwrap();
            prop_assert!((back - hours).abs() < 1e-9 * hours.max(1.0));
        }
    }
}
