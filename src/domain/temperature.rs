use serde::Serialize;
use thiserror::Error;
use time::Date;

/// Min/max/mean of the readings for one state, in °F.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TemperatureSummary {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl TemperatureSummary {
    /// Placeholder for entries without data. Display only, never averaged.
    pub const SENTINEL: TemperatureSummary = TemperatureSummary {
        min: 0.0,
        max: 0.0,
        average: 0.0,
    };

    /// Summarises a set of readings. Returns `None` when there are none.
    pub fn from_readings(readings: &[f64]) -> Option<Self> {
        let readings: Vec<f64> = readings
            .iter()
            .copied()
            .filter(|value| value.is_finite())
            .collect();
        if readings.is_empty() {
            return None;
        }

        let min = readings.iter().copied().fold(f64::INFINITY, f64::min);
        let max = readings.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let average = readings.iter().sum::<f64>() / readings.len() as f64;

        Some(Self {
            min: round2(min),
            max: round2(max),
            average: round2(average),
        })
    }

    pub fn instantaneous(reading: f64) -> Self {
        let value = round2(reading);
        Self {
            min: value,
            max: value,
            average: value,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Why a provider call produced no summary.
#[derive(Clone, Debug, Error, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFailure {
    #[error("weather service unavailable: {0}")]
    Unavailable(String),
    #[error("no forecast readings for {0}")]
    NoReadingsForDate(Date),
    #[error("{0} is outside the forecast window")]
    OutsideHorizon(Date),
    #[error("weather API key is not configured")]
    MissingCredential,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateReading {
    Measured(TemperatureSummary),
    Failed(FetchFailure),
}

impl StateReading {
    pub fn summary(&self) -> Option<&TemperatureSummary> {
        match self {
            StateReading::Measured(summary) => Some(summary),
            StateReading::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            StateReading::Measured(_) => None,
            StateReading::Failed(reason) => Some(reason),
        }
    }
}

impl From<Result<TemperatureSummary, FetchFailure>> for StateReading {
    fn from(value: Result<TemperatureSummary, FetchFailure>) -> Self {
        match value {
            Ok(summary) => StateReading::Measured(summary),
            Err(reason) => StateReading::Failed(reason),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StateTemperature {
    pub state: String,
    pub reading: StateReading,
}

/// Per-state readings in route order.
///
/// Holds one entry per input state known to the coordinate table. Unknown
/// states never get an entry; they are listed in `skipped` instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RouteTemperatureResult {
    pub entries: Vec<StateTemperature>,
    pub skipped: Vec<String>,
}

impl RouteTemperatureResult {
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.state.as_str())
    }

    pub fn get(&self, state: &str) -> Option<&StateReading> {
        self.entries
            .iter()
            .find(|entry| entry.state == state)
            .map(|entry| &entry.reading)
    }

    /// Legacy view where failed states read as {0, 0, 0}.
    pub fn summary_or_sentinel(&self, state: &str) -> Option<TemperatureSummary> {
        self.get(state).map(|reading| {
            reading
                .summary()
                .copied()
                .unwrap_or(TemperatureSummary::SENTINEL)
        })
    }

    pub fn measured_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.reading.summary().is_some())
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &FetchFailure)> {
        self.entries.iter().filter_map(|entry| {
            entry
                .reading
                .failure()
                .map(|reason| (entry.state.as_str(), reason))
        })
    }

    /// Mean of the per-state averages over measured states only.
    pub fn average(&self) -> Option<f64> {
        let averages: Vec<f64> = self
            .entries
            .iter()
            .filter_map(|entry| entry.reading.summary().map(|s| s.average))
            .collect();
        if averages.is_empty() {
            None
        } else {
            Some(averages.iter().sum::<f64>() / averages.len() as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn measured(state: &str, average: f64) -> StateTemperature {
        StateTemperature {
            state: state.to_string(),
            reading: StateReading::Measured(TemperatureSummary::instantaneous(average)),
        }
    }

    #[test]
    fn summary_rounds_to_two_decimals() {
        let summary = TemperatureSummary::from_readings(&[41.234, 47.111, 52.999]).unwrap();
        assert_eq!(summary.min, 41.23);
        assert_eq!(summary.max, 53.0);
        assert_eq!(summary.average, 47.11);
    }

    #[test]
    fn summary_requires_at_least_one_reading() {
        assert!(TemperatureSummary::from_readings(&[]).is_none());
        assert!(TemperatureSummary::from_readings(&[f64::NAN]).is_none());
    }

    #[test]
    fn average_ignores_failed_states() {
        let result = RouteTemperatureResult {
            entries: vec![
                measured("Maine", 45.0),
                StateTemperature {
                    state: "Ohio".to_string(),
                    reading: StateReading::Failed(FetchFailure::Unavailable("timeout".into())),
                },
                measured("New York", 55.0),
            ],
            skipped: vec![],
        };

        assert_eq!(result.average(), Some(50.0));
        assert_eq!(result.measured_count(), 2);
        assert_eq!(
            result.summary_or_sentinel("Ohio"),
            Some(TemperatureSummary::SENTINEL)
        );
        assert_eq!(result.failures().count(), 1);
    }

    #[test]
    fn average_is_undefined_without_measurements() {
        let result = RouteTemperatureResult {
            entries: vec![StateTemperature {
                state: "Maine".to_string(),
                reading: StateReading::Failed(FetchFailure::OutsideHorizon(date!(2030 - 01 - 01))),
            }],
            skipped: vec![],
        };

        assert_eq!(result.average(), None);
    }
}
