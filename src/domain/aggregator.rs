//! Route-level temperature collection.
//!
//! - One provider call per known state, at most `max_concurrent` in flight.
//! - Results are re-ordered to the route order once every call settles.
//! - A failing state is recorded and never aborts the rest of the route.

use futures::stream::{self, StreamExt};
use time::Date;

use super::{
    coordinates,
    provider::TemperatureProvider,
    temperature::{RouteTemperatureResult, StateReading, StateTemperature},
};

pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 5;

pub struct RouteTemperatureAggregator<P> {
    provider: P,
    max_concurrent: usize,
}

impl<P: TemperatureProvider> RouteTemperatureAggregator<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            max_concurrent: DEFAULT_MAX_CONCURRENT_REQUESTS,
        }
    }

    pub fn with_max_concurrent(mut self, limit: usize) -> Self {
        self.max_concurrent = limit.max(1);
        self
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn aggregate(&self, states: &[String], date: Option<Date>) -> RouteTemperatureResult {
        let mut skipped = Vec::new();
        let mut targets = Vec::with_capacity(states.len());
        for state in states {
            match coordinates::lookup(state) {
                Some(coord) => targets.push((state.clone(), coord)),
                None => {
                    tracing::warn!(state = %state, "no coordinates for state, skipping");
                    skipped.push(state.clone());
                }
            }
        }

        tracing::debug!(
            states = targets.len(),
            skipped = skipped.len(),
            limit = self.max_concurrent,
            ?date,
            "collecting route temperatures"
        );

        let provider = &self.provider;
        let mut settled: Vec<(usize, StateReading)> = stream::iter(targets.iter().enumerate())
            .map(|(idx, (state, coord))| async move {
                let outcome = provider
                    .fetch(coord.latitude, coord.longitude, date)
                    .await;
                if let Err(reason) = &outcome {
                    tracing::warn!(state = %state, %reason, "temperature data not available");
                }
                (idx, StateReading::from(outcome))
            })
            .buffer_unordered(self.max_concurrent)
            .collect()
            .await;

        // Completion order is arbitrary; restore route order.
        settled.sort_by_key(|(idx, _)| *idx);

        let entries = targets
            .into_iter()
            .zip(settled)
            .map(|((state, _), (_, reading))| StateTemperature { state, reading })
            .collect();

        RouteTemperatureResult { entries, skipped }
    }
}
