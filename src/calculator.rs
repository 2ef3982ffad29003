//! Seasonal sunrise and sunset approximation.
//!
//! This module turns a latitude and a calendar date into sunrise and sunset
//! hours using a closed-form cosine model rather than a solar ephemeris:
//!
//! ```text
//! modifier = cos(2π × (day_of_year + 10) / 365.25 + phase)
//! sunrise  = 6  - half_amplitude × modifier
//! sunset   = 18 + half_amplitude × modifier
//! ```
//!
//! The amplitude grows linearly with the absolute latitude (clamped to 80°) and
//! the phase flips by half a year between hemispheres. Results are hours past
//! local midnight and are intentionally not clamped to `[0, 24]`.

use chrono::Datelike;
use std::f64::consts::PI;

use crate::constants::{
    BASE_DAY_SWING, DAY_OF_YEAR_OFFSET, DAYS_PER_YEAR, EQUINOX_SUNRISE_HOUR, EQUINOX_SUNSET_HOUR,
    HOURS_PER_DAY, LATITUDE_DEGREES_PER_HOUR, MAX_SUPPORTED_LATITUDE,
};
use crate::time_state::hours_to_naive_time;

/// Hemisphere of the simulated city, selecting which half of the year has long days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// Latitude zero or above. Long days around the June solstice.
    Northern,
    /// Latitude strictly below zero. Long days around the December solstice.
    Southern,
}

impl Hemisphere {
    /// Hemisphere for a latitude in degrees.
    ///
    /// The check is a strict `latitude < 0`, so the equator (and NaN) count as northern.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }

    /// Phase offset in radians added to the seasonal cosine.
    pub fn phase(self) -> f64 {
        match self {
            Hemisphere::Northern => PI,
            Hemisphere::Southern => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Hemisphere::Northern => "northern",
            Hemisphere::Southern => "southern",
        }
    }
}

/// Sunrise and sunset for one day, in hours past midnight.
///
/// `Default` is the zeroed pair handed out before any latitude is known.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayTimes {
    pub sunrise_hour: f64,
    pub sunset_hour: f64,
}

impl DayTimes {
    /// Hours between sunrise and sunset.
    pub fn day_length(&self) -> f64 {
        self.sunset_hour - self.sunrise_hour
    }

    /// Hours between sunset and the following sunrise, assuming an unchanged next day.
    pub fn night_length(&self) -> f64 {
        HOURS_PER_DAY - self.day_length()
    }

    /// Whether this is the zeroed "not ready" pair.
    pub fn is_empty(&self) -> bool {
        self.sunrise_hour == 0.0 && self.sunset_hour == 0.0
    }

    /// Sunrise as a wall-clock time, wrapped into a single day.
    pub fn sunrise_time(&self) -> chrono::NaiveTime {
        hours_to_naive_time(self.sunrise_hour)
    }

    /// Sunset as a wall-clock time, wrapped into a single day.
    pub fn sunset_time(&self) -> chrono::NaiveTime {
        hours_to_naive_time(self.sunset_hour)
    }
}

/// Computes sunrise and sunset hours for a fixed latitude.
///
/// Both derived parameters are fixed at construction; every calculation is a
/// pure function of them and the supplied day, so a calculator can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTimeCalculator {
    half_amplitude: f64,
    hemisphere: Hemisphere,
}

impl DayTimeCalculator {
    /// Create a calculator for the given latitude in degrees.
    ///
    /// Every input is accepted. The sign selects the hemisphere, and absolute
    /// values above 80° are treated as exactly 80°.
    ///
    /// # Examples
    /// ```
    /// use daytime::DayTimeCalculator;
    /// let equator = DayTimeCalculator::new(0.0);
    /// assert_eq!(equator.half_amplitude(), 0.25);
    /// assert_eq!(DayTimeCalculator::new(95.0), DayTimeCalculator::new(80.0));
    /// ```
    pub fn new(latitude: f64) -> Self {
        let hemisphere = Hemisphere::from_latitude(latitude);
        let clamped = clamp_latitude(latitude);
        let half_amplitude = (BASE_DAY_SWING + (clamped / LATITUDE_DEGREES_PER_HOUR)) / 2.0;

        Self {
            half_amplitude,
            hemisphere,
        }
    }

    /// Hours sunrise and sunset move away from 6:00/18:00 at the seasonal extremes.
    pub fn half_amplitude(&self) -> f64 {
        self.half_amplitude
    }

    /// Phase offset in radians: `π` for the northern hemisphere, `0` for the southern.
    pub fn phase(&self) -> f64 {
        self.hemisphere.phase()
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Seasonal factor in `[-1, 1]` for a (possibly fractional) day of year.
    ///
    /// Positive values lengthen the day, negative values shorten it.
    pub fn modifier(&self, day_of_year: f64) -> f64 {
        (2.0 * PI * (day_of_year + DAY_OF_YEAR_OFFSET) / DAYS_PER_YEAR + self.phase()).cos()
    }

    /// Sunrise and sunset for a calendar date.
    ///
    /// Only the ordinal day of year is used, so any `chrono` date type works.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use daytime::DayTimeCalculator;
    ///
    /// let calculator = DayTimeCalculator::new(52.5);
    /// let midsummer = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// let times = calculator.calculate(&midsummer);
    /// assert!(times.sunrise_hour < 6.0);
    /// assert!(times.sunset_hour > 18.0);
    /// ```
    pub fn calculate<D: Datelike>(&self, date: &D) -> DayTimes {
        self.calculate_for_day(f64::from(date.ordinal()))
    }

    /// Sunrise and sunset for a raw day-of-year value.
    ///
    /// Accepts fractional days so callers with sub-day resolution get a
    /// continuous curve. Integral values match [`calculate`](Self::calculate).
    pub fn calculate_for_day(&self, day_of_year: f64) -> DayTimes {
        let shift = self.half_amplitude * self.modifier(day_of_year);

        DayTimes {
            sunrise_hour: EQUINOX_SUNRISE_HOUR - shift,
            sunset_hour: EQUINOX_SUNSET_HOUR + shift,
        }
    }
}

/// Absolute latitude limited to the supported band.
///
/// NaN collapses to the upper bound because `f64::min` ignores it.
pub fn clamp_latitude(latitude: f64) -> f64 {
    latitude.abs().min(MAX_SUPPORTED_LATITUDE)
}
