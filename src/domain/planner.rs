//! Turns a route and a delivery date into the full result bundle shown to
//! the user.

use serde::Serialize;
use time::Date;

use super::{
    aggregator::RouteTemperatureAggregator,
    optimizer::{evaluate_dates, select_optimal, DateCandidate},
    provider::TemperatureProvider,
    recommendation::{recommend, recommendation_for, ComfortBand, RecommendationResult},
    route::RouteRecord,
    savings::{compute_savings, CostComparison},
    temperature::RouteTemperatureResult,
    window::{ForecastWindow, DEFAULT_LOOKAHEAD_DAYS},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoutePlan {
    pub origin: String,
    pub destination: String,
    pub date: Date,
    /// True when the plan used current readings instead of a forecast day.
    pub current_conditions: bool,
    pub base_cost: f64,
    pub temperatures: RouteTemperatureResult,
    pub average_temperature: Option<f64>,
    pub recommendation: Option<RecommendationResult>,
    pub costs: Option<CostComparison>,
    pub date_options: Vec<DateCandidate>,
    pub optimal: Option<DateCandidate>,
    pub warnings: Vec<String>,
}

impl RoutePlan {
    /// Whether the optimal date would move the shipment off the selected day.
    pub fn better_date(&self) -> Option<&DateCandidate> {
        let optimal = self.optimal.as_ref()?;
        let target = ComfortBand::DEFAULT.midpoint();
        match self.average_temperature {
            Some(current)
                if (current - target).abs() <= (optimal.average_temperature - target).abs() =>
            {
                None
            }
            _ => Some(optimal),
        }
    }
}

pub struct RoutePlanner<P> {
    aggregator: RouteTemperatureAggregator<P>,
    window: ForecastWindow,
    lookahead_days: u8,
}

impl<P: TemperatureProvider> RoutePlanner<P> {
    pub fn new(aggregator: RouteTemperatureAggregator<P>, window: ForecastWindow) -> Self {
        Self {
            aggregator,
            window,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }

    pub fn with_lookahead(mut self, days: u8) -> Self {
        self.lookahead_days = days;
        self
    }

    pub fn window(&self) -> &ForecastWindow {
        &self.window
    }

    pub fn aggregator(&self) -> &RouteTemperatureAggregator<P> {
        &self.aggregator
    }

    /// Plans `route` for `date`, or for current conditions when `date` is
    /// `None`.
    #[tracing::instrument(skip_all, fields(destination = %route.destination, ?date))]
    pub async fn plan(&self, route: &RouteRecord, date: Option<Date>) -> RoutePlan {
        let mut warnings = Vec::new();
        if let Some(date) = date.filter(|date| !self.window.contains(*date)) {
            warnings.push(format!(
                "{date} is outside the forecast window ({} to {}).",
                self.window.today(),
                self.window.last_day()
            ));
        }

        let temperatures = self.aggregator.aggregate(&route.states, date).await;
        for state in &temperatures.skipped {
            warnings.push(format!("No coordinates for {state}; excluded from the route."));
        }
        for (state, reason) in temperatures.failures() {
            warnings.push(format!("Temperature data not available for {state}: {reason}"));
        }

        let average_temperature = temperatures.average();
        if average_temperature.is_none() {
            warnings.push("No temperature data for this route; recommendation unavailable.".into());
        }

        let recommendation = average_temperature.map(recommendation_for);
        let costs = recommendation.map(|result| compute_savings(route.base_cost, result.category));

        let anchor = date.unwrap_or_else(|| self.window.today());
        let candidates = self.window.candidates_after(anchor, self.lookahead_days);
        let date_options = evaluate_dates(&self.aggregator, &route.states, &candidates, recommend).await;
        let optimal = select_optimal(date_options.iter().copied(), ComfortBand::DEFAULT.midpoint());

        tracing::info!(
            average = ?average_temperature,
            category = ?recommendation.map(|r| r.category),
            optimal = ?optimal.map(|c| c.date),
            warnings = warnings.len(),
            "route planned"
        );

        RoutePlan {
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            date: anchor,
            current_conditions: date.is_none(),
            base_cost: route.base_cost,
            temperatures,
            average_temperature,
            recommendation,
            costs,
            date_options,
            optimal,
            warnings,
        }
    }
}
