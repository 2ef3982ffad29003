//! # Daytime
//!
//! Seasonal sunrise and sunset hours for driving the day/night cycle of a city
//! simulation.
//!
//! Daytime approximates day length with a single cosine over the year whose
//! amplitude grows with latitude. It trades astronomical precision for a
//! smooth, cheap and fully deterministic curve.
//!
//! ## Architecture
//!
//! - **calculator**: The sunrise/sunset model itself (pure, immutable)
//! - **simulation**: Readiness gate returning a zeroed pair until a latitude is known
//! - **time_state**: Day/night state, next-event timing and clock conversion
//! - **config**: Configuration loading, validation, and default generation
//! - **constants**: Model constants, defaults and validation limits
//! - **logger**: Structured logging with visual formatting
//! - **args**: Command-line parsing for the `daytime` binary
//! - **utils**: Formatting helpers
//!
//! ```
//! use chrono::NaiveDate;
//! use daytime::DayTimeCalculator;
//!
//! let calculator = DayTimeCalculator::new(-33.9);
//! let times = calculator.calculate(&NaiveDate::from_ymd_opt(2024, 12, 21).unwrap());
//! assert!((times.sunrise_hour + times.sunset_hour - 24.0).abs() < 1e-9);
//! assert!(times.day_length() > 12.0);
//! ```

pub mod args;
pub mod calculator;
pub mod config;
pub mod constants;
pub mod logger;
pub mod simulation;
pub mod time_state;
pub mod utils;

// Re-export important types for easier access
pub use calculator::{DayTimeCalculator, DayTimes, Hemisphere};
pub use config::Config;
pub use logger::{Log, LogLevel};
pub use simulation::DayTimeSource;
pub use time_state::{TimeState, get_time_state, time_until_next_event};
