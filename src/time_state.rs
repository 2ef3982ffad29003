//! Day/night state derived from sunrise and sunset hours.
//!
//! This module answers the questions a day/night cycle asks every tick:
//! whether a given hour of the simulated day is daytime, how long until the
//! next sunrise or sunset, and how a fractional hour maps onto a wall clock.
//!
//! ## Key Functionality
//! - **State Detection**: Determining whether an hour falls in the day or the night
//! - **Next Event**: Time remaining until the next sunrise or sunset, wrapping past midnight
//! - **Clock Conversion**: Turning fractional hours into `NaiveTime` values

use chrono::NaiveTime;
use std::time::Duration as StdDuration;

use crate::calculator::DayTimes;
use crate::constants::HOURS_PER_DAY;

const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: u32 = 24 * 3600;

/// Represents the basic time-based state of the simulated day.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum TimeState {
    Day,   // Between sunrise and sunset
    Night, // Between sunset and the following sunrise
}

impl TimeState {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeState::Day => "day",
            TimeState::Night => "night",
        }
    }
}

/// The next sunrise/sunset boundary after a given hour.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum DayEvent {
    Sunrise,
    Sunset,
}

/// Convert hours past midnight into a wall-clock time.
///
/// Values outside `[0, 24)` wrap around the day, and the result is rounded to
/// the nearest second. Non-finite input maps to midnight.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use daytime::time_state::hours_to_naive_time;
/// assert_eq!(hours_to_naive_time(6.25), NaiveTime::from_hms_opt(6, 15, 0).unwrap());
/// assert_eq!(hours_to_naive_time(25.5), NaiveTime::from_hms_opt(1, 30, 0).unwrap());
/// ```
pub fn hours_to_naive_time(hours: f64) -> NaiveTime {
    let wrapped = wrap_hour(hours);
    let seconds = (wrapped * SECONDS_PER_HOUR).round() as u32 % SECONDS_PER_DAY;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or(NaiveTime::MIN)
}

/// Fold any hour value into `[0, 24)`.
pub fn wrap_hour(hour: f64) -> f64 {
    let wrapped = hour.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to exactly 24.0 for tiny negative inputs
    if wrapped >= HOURS_PER_DAY { 0.0 } else { wrapped }
}

/// Determine whether `hour` is day or night for the given sunrise/sunset pair.
///
/// Day is the half-open range `[sunrise, sunset)`. The zeroed pair produced
/// before a latitude is configured has no daytime at all.
pub fn get_time_state(times: &DayTimes, hour: f64) -> TimeState {
    if times.is_empty() {
        return TimeState::Night;
    }

    let hour = wrap_hour(hour);
    if hour >= times.sunrise_hour && hour < times.sunset_hour {
        TimeState::Day
    } else {
        TimeState::Night
    }
}

/// The next sunrise or sunset after `hour`, and the time remaining until it.
///
/// Once sunset has passed the next event is the following sunrise, assumed to
/// happen at the same hour as today's. Returns `None` for the zeroed pair, for
/// a non-finite `hour`, and when the wait would come out negative.
pub fn next_event(times: &DayTimes, hour: f64) -> Option<(DayEvent, StdDuration)> {
    if times.is_empty() || !hour.is_finite() {
        return None;
    }

    let hour = wrap_hour(hour);
    let (event, hours_until) = if hour < times.sunrise_hour {
        (DayEvent::Sunrise, times.sunrise_hour - hour)
    } else if hour < times.sunset_hour {
        (DayEvent::Sunset, times.sunset_hour - hour)
    } else {
        (DayEvent::Sunrise, HOURS_PER_DAY - hour + times.sunrise_hour)
    };

    let remaining = StdDuration::try_from_secs_f64(hours_until * SECONDS_PER_HOUR).ok()?;
    Some((event, remaining))
}

/// Time remaining until the next sunrise or sunset, if there is one.
pub fn time_until_next_event(times: &DayTimes, hour: f64) -> Option<StdDuration> {
    next_event(times, hour).map(|(_, remaining)| remaining)
}

/// Hour of day (with fractional minutes and seconds) for a wall-clock time.
pub fn naive_time_to_hours(time: NaiveTime) -> f64 {
    use chrono::Timelike;
    f64::from(time.num_seconds_from_midnight()) / SECONDS_PER_HOUR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_times() -> DayTimes {
        DayTimes {
            sunrise_hour: 5.5,
            sunset_hour: 19.25,
        }
    }

    #[test]
    fn test_hours_to_naive_time_basic() {
        assert_eq!(hours_to_naive_time(0.0), NaiveTime::MIN);
        assert_eq!(
            hours_to_naive_time(6.0),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
        assert_eq!(
            hours_to_naive_time(18.0 + 20.0 / 60.0),
            NaiveTime::from_hms_opt(18, 20, 0).unwrap()
        );
    }

    #[test]
    fn test_hours_to_naive_time_wraps() {
        assert_eq!(
            hours_to_naive_time(-1.0),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap()
        );
        assert_eq!(
            hours_to_naive_time(24.5),
            NaiveTime::from_hms_opt(0, 30, 0).unwrap()
        );
        // Rounds up past the last second of the day
        assert_eq!(hours_to_naive_time(23.99999), NaiveTime::MIN);
        assert_eq!(hours_to_naive_time(f64::NAN), NaiveTime::MIN);
    }

    #[test]
    fn test_naive_time_round_trip() {
        let time = NaiveTime::from_hms_opt(7, 45, 30).unwrap();
        assert_eq!(hours_to_naive_time(naive_time_to_hours(time)), time);
    }

    #[test]
    fn test_get_time_state() {
        let times = standard_times();
        assert_eq!(get_time_state(&times, 3.0), TimeState::Night);
        assert_eq!(get_time_state(&times, 5.5), TimeState::Day);
        assert_eq!(get_time_state(&times, 12.0), TimeState::Day);
        assert_eq!(get_time_state(&times, 19.25), TimeState::Night);
        assert_eq!(get_time_state(&times, 23.9), TimeState::Night);
        assert_eq!(get_time_state(&times, 36.0), TimeState::Day);
    }

    #[test]
    fn test_time_state_names() {
        assert_eq!(TimeState::Day.as_str(), "day");
        assert_eq!(TimeState::Night.as_str(), "night");
    }

    #[test]
    fn test_get_time_state_empty_pair_is_night() {
        let times = DayTimes::default();
        for hour in [0.0, 6.0, 12.0, 18.0] {
            assert_eq!(get_time_state(&times, hour), TimeState::Night);
        }
    }

    #[test]
    fn test_next_event_before_sunrise() {
        let (event, remaining) = next_event(&standard_times(), 4.0).unwrap();
        assert_eq!(event, DayEvent::Sunrise);
        assert_eq!(remaining, StdDuration::from_secs(90 * 60));
    }

    #[test]
    fn test_next_event_during_day() {
        let (event, remaining) = next_event(&standard_times(), 19.0).unwrap();
        assert_eq!(event, DayEvent::Sunset);
        assert_eq!(remaining, StdDuration::from_secs(15 * 60));
    }

    #[test]
    fn test_next_event_after_sunset_wraps_midnight() {
        let (event, remaining) = next_event(&standard_times(), 22.0).unwrap();
        assert_eq!(event, DayEvent::Sunrise);
        assert_eq!(remaining, StdDuration::from_secs(7 * 3600 + 30 * 60));
    }

    #[test]
    fn test_time_until_next_event_empty_pair() {
        assert_eq!(time_until_next_event(&DayTimes::default(), 12.0), None);
    }

    #[test]
    fn test_time_until_next_event_non_finite_hour() {
        let times = crate::calculator::DayTimeCalculator::new(40.0).calculate_for_day(100.0);
        assert_eq!(time_until_next_event(&times, f64::NAN), None);
        assert_eq!(time_until_next_event(&times, f64::INFINITY), None);
        assert_eq!(next_event(&times, f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_next_event_unreachable_sunrise() {
        // Unclamped pair whose next sunrise already lies in the past
        let times = DayTimes {
            sunrise_hour: -5.0,
            sunset_hour: 3.0,
        };
        assert_eq!(next_event(&times, 22.0), None);
    }
}
