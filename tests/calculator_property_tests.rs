use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use std::f64::consts::PI;

use daytime::calculator::clamp_latitude;
use daytime::time_state::{TimeState, get_time_state, wrap_hour};
use daytime::{DayTimeCalculator, Hemisphere};

const TOLERANCE: f64 = 1e-9;

/// Generate latitude values across and beyond the geographic range
fn latitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// Generate latitudes the calculator does not clamp
fn supported_latitude_strategy() -> impl Strategy<Value = f64> {
    -80.0..=80.0
}

fn day_of_year_strategy() -> impl Strategy<Value = f64> {
    1.0..=366.0
}

/// Generate arbitrary calendar dates, leap years included
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=366).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
            .or_else(|| NaiveDate::from_yo_opt(year, 365))
            .unwrap()
    })
}

proptest! {
    /// Sunrise and sunset always mirror each other around noon
    #[test]
    fn test_sunrise_plus_sunset_is_24(
        latitude in latitude_strategy(),
        date in date_strategy()
    ) {
        let times = DayTimeCalculator::new(latitude).calculate(&date);
        prop_assert!((times.sunrise_hour + times.sunset_hour - 24.0).abs() < TOLERANCE);
    }

    /// Absolute latitudes within 80° are used as-is, anything beyond collapses to 80°
    #[test]
    fn test_latitude_clamping(latitude in latitude_strategy()) {
        let clamped = clamp_latitude(latitude);
        if latitude.abs() <= 80.0 {
            prop_assert_eq!(clamped, latitude.abs());
        } else {
            prop_assert_eq!(clamped, 80.0);
        }
    }

    /// Phase depends only on the sign of the latitude
    #[test]
    fn test_hemisphere_phase(latitude in latitude_strategy()) {
        let calculator = DayTimeCalculator::new(latitude);
        if latitude < 0.0 {
            prop_assert_eq!(calculator.hemisphere(), Hemisphere::Southern);
            prop_assert_eq!(calculator.phase(), 0.0);
        } else {
            prop_assert_eq!(calculator.hemisphere(), Hemisphere::Northern);
            prop_assert_eq!(calculator.phase(), PI);
        }
    }

    /// Amplitude never shrinks as the city moves away from the equator
    #[test]
    fn test_amplitude_monotonic(a in 0.0f64..=80.0, b in 0.0f64..=80.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            DayTimeCalculator::new(low).half_amplitude()
                <= DayTimeCalculator::new(high).half_amplitude()
        );
    }

    /// Mirrored latitudes share an amplitude
    #[test]
    fn test_amplitude_sign_independent(latitude in latitude_strategy()) {
        prop_assert_eq!(
            DayTimeCalculator::new(latitude).half_amplitude(),
            DayTimeCalculator::new(-latitude).half_amplitude()
        );
    }

    /// Sunrise and sunset stay within half_amplitude of the 6:00/18:00 baseline
    #[test]
    fn test_deviation_bounded_by_amplitude(
        latitude in latitude_strategy(),
        day in day_of_year_strategy()
    ) {
        let calculator = DayTimeCalculator::new(latitude);
        let times = calculator.calculate_for_day(day);
        let bound = calculator.half_amplitude() + TOLERANCE;
        prop_assert!((times.sunrise_hour - 6.0).abs() <= bound);
        prop_assert!((times.sunset_hour - 18.0).abs() <= bound);
    }

    /// The southern hemisphere runs half a year behind the northern one
    #[test]
    fn test_opposite_hemispheres_half_year_apart(
        latitude in 0.0f64..=80.0,
        day in day_of_year_strategy()
    ) {
        let north = DayTimeCalculator::new(latitude);
        let south = DayTimeCalculator::new(-latitude);
        // Exactly zero is northern on both sides
        prop_assume!(latitude > 0.0);

        let southern = south.calculate_for_day(day);
        for shifted_day in [day + 182.625, day - 182.625] {
            let northern = north.calculate_for_day(shifted_day);
            prop_assert!((southern.sunrise_hour - northern.sunrise_hour).abs() < TOLERANCE);
            prop_assert!((southern.sunset_hour - northern.sunset_hour).abs() < TOLERANCE);
        }
    }

    /// Same input, same bits
    #[test]
    fn test_calculation_deterministic(
        latitude in latitude_strategy(),
        date in date_strategy()
    ) {
        let calculator = DayTimeCalculator::new(latitude);
        let first = calculator.calculate(&date);
        let second = DayTimeCalculator::new(latitude).calculate(&date);
        prop_assert_eq!(first.sunrise_hour.to_bits(), second.sunrise_hour.to_bits());
        prop_assert_eq!(first.sunset_hour.to_bits(), second.sunset_hour.to_bits());
    }

    /// Date-based and ordinal-based calculation agree
    #[test]
    fn test_calculate_matches_ordinal(
        latitude in supported_latitude_strategy(),
        date in date_strategy()
    ) {
        let calculator = DayTimeCalculator::new(latitude);
        prop_assert_eq!(
            calculator.calculate(&date),
            calculator.calculate_for_day(f64::from(date.ordinal()))
        );
    }

    /// Noon is always daytime and midnight always night for supported latitudes
    #[test]
    fn test_noon_is_day_midnight_is_night(
        latitude in latitude_strategy(),
        date in date_strategy()
    ) {
        let times = DayTimeCalculator::new(latitude).calculate(&date);
        prop_assert_eq!(get_time_state(&times, 12.0), TimeState::Day);
        prop_assert_eq!(get_time_state(&times, 0.0), TimeState::Night);
    }

    /// Wrapped hours always land inside a single day
    #[test]
    fn test_wrap_hour_range(hour in -1000.0f64..1000.0) {
        let wrapped = wrap_hour(hour);
        prop_assert!((0.0..24.0).contains(&wrapped));
    }
}
