//! Scripted provider shared by the domain tests.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use time::Date;

use super::{
    coordinates,
    provider::TemperatureProvider,
    temperature::{FetchFailure, TemperatureSummary},
};

pub fn states(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

type Scripted = Result<TemperatureSummary, FetchFailure>;

#[derive(Default)]
pub struct ScriptedProvider {
    by_state: HashMap<String, Scripted>,
    by_state_and_date: HashMap<(String, Date), Scripted>,
    delays: HashMap<String, Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn with_average(mut self, state: &str, average: f64) -> Self {
        self.by_state.insert(
            state.to_string(),
            Ok(TemperatureSummary::instantaneous(average)),
        );
        self
    }

    pub fn with_average_on(mut self, state: &str, date: Date, average: f64) -> Self {
        self.by_state_and_date.insert(
            (state.to_string(), date),
            Ok(TemperatureSummary::instantaneous(average)),
        );
        self
    }

    pub fn with_failure(mut self, state: &str, failure: FetchFailure) -> Self {
        self.by_state.insert(state.to_string(), Err(failure));
        self
    }

    pub fn with_delay(mut self, state: &str, delay: Duration) -> Self {
        self.delays.insert(state.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn state_at(latitude: f64, longitude: f64) -> Option<&'static str> {
        coordinates::all()
            .iter()
            .find(|coord| coord.latitude == latitude && coord.longitude == longitude)
            .map(|coord| coord.name)
    }
}

#[async_trait]
impl TemperatureProvider for ScriptedProvider {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        target: Option<Date>,
    ) -> Result<TemperatureSummary, FetchFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);

        let state = Self::state_at(latitude, longitude).unwrap_or("unknown");
        match self.delays.get(state) {
            Some(delay) => tokio::time::sleep(*delay).await,
            None => tokio::task::yield_now().await,
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        target
            .and_then(|date| self.by_state_and_date.get(&(state.to_string(), date)))
            .or_else(|| self.by_state.get(state))
            .cloned()
            .unwrap_or_else(|| Err(FetchFailure::Unavailable(format!("no script for {state}"))))
    }
}
