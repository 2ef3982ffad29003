//! Readiness-gated access to sunrise/sunset times for a running simulation.
//!
//! A simulation usually starts ticking before a map (and therefore a latitude)
//! is loaded. `DayTimeSource` owns an optional calculator and hands out the
//! zeroed `DayTimes` pair until one is configured, so the calculator itself
//! never needs a "not ready" state.

use chrono::Datelike;

use crate::calculator::{DayTimeCalculator, DayTimes};

/// Optional calculator with a zeroed fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTimeSource {
    calculator: Option<DayTimeCalculator>,
}

impl DayTimeSource {
    /// A source with no latitude yet. Every calculation yields the zeroed pair.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latitude(latitude: f64) -> Self {
        Self {
            calculator: Some(DayTimeCalculator::new(latitude)),
        }
    }

    /// Install a calculator for `latitude`, replacing any previous one.
    pub fn configure(&mut self, latitude: f64) {
        self.calculator = Some(DayTimeCalculator::new(latitude));
    }

    /// Drop the current calculator, e.g. when the map is unloaded.
    pub fn reset(&mut self) {
        self.calculator = None;
    }

    pub fn is_ready(&self) -> bool {
        self.calculator.is_some()
    }

    pub fn calculator(&self) -> Option<&DayTimeCalculator> {
        self.calculator.as_ref()
    }

    /// Sunrise and sunset for `date`, or `None` when no latitude is configured.
    pub fn try_calculate<D: Datelike>(&self, date: &D) -> Option<DayTimes> {
        self.calculator.map(|calculator| calculator.calculate(date))
    }

    /// Sunrise and sunset for `date`, falling back to `DayTimes::default()`.
    pub fn calculate<D: Datelike>(&self, date: &D) -> DayTimes {
        self.try_calculate(date).unwrap_or_default()
    }
}

impl From<DayTimeCalculator> for DayTimeSource {
    fn from(calculator: DayTimeCalculator) -> Self {
        Self {
            calculator: Some(calculator),
        }
    }
}
