//! Application constants and default values for daytime.
//!
//! This module contains the day-length model constants, configuration defaults,
//! validation limits, and operational constants used throughout the application.

// ═══ Day-Length Model ═══
// Constants of the seasonal cosine approximation. These are part of the
// behavioral contract and must not be tuned for astronomical accuracy.

pub const EQUINOX_SUNRISE_HOUR: f64 = 6.0; // Sunrise when the seasonal modifier is zero
pub const EQUINOX_SUNSET_HOUR: f64 = 18.0; // Sunset when the seasonal modifier is zero
pub const MAX_SUPPORTED_LATITUDE: f64 = 80.0; // Absolute latitudes above this are clamped
pub const BASE_DAY_SWING: f64 = 0.5; // Full swing in hours at the equator
pub const LATITUDE_DEGREES_PER_HOUR: f64 = 15.0; // Each 15° of latitude adds an hour of swing
pub const DAY_OF_YEAR_OFFSET: f64 = 10.0; // Aligns the shortest day near the winter solstice
pub const DAYS_PER_YEAR: f64 = 365.25; // Mean year length, absorbs leap years

pub const HOURS_PER_DAY: f64 = 24.0;

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_LATITUDE: f64 = 45.0; // Degrees north
pub const DEFAULT_DAYS: u32 = 1; // Number of days printed by the CLI

// ═══ Validation Limits ═══
// These limits ensure user inputs are within reasonable ranges

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_DAYS: u32 = 1;
pub const MAXIMUM_DAYS: u32 = 366; // One full leap year

// ═══ Output Formatting ═══

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ═══ Exit Codes ═══
// Standard exit codes for process termination

pub const EXIT_FAILURE: i32 = 1; // General failure

// ═══ Test Constants ═══
// Common values used in tests for consistency
#[cfg(test)]
pub mod test_constants {
    pub const TEST_TOLERANCE: f64 = 1e-9;
    pub const TEST_NORTHERN_LATITUDE: f64 = 40.0;
    pub const TEST_SOUTHERN_LATITUDE: f64 = -40.0;
    pub const TEST_POLAR_LATITUDE: f64 = 95.0;
    pub const HALF_YEAR_DAYS: f64 = super::DAYS_PER_YEAR / 2.0;
}
