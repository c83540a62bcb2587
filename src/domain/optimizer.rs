use serde::Serialize;
use time::Date;

use super::{
    aggregator::RouteTemperatureAggregator,
    provider::TemperatureProvider,
    recommendation::{ComfortBand, TruckCategory},
};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DateCandidate {
    pub date: Date,
    pub average_temperature: f64,
    pub category: TruckCategory,
}

/// Runs the route through the aggregator once per candidate date. Dates
/// without any measured state are left out.
pub async fn evaluate_dates<P, F>(
    aggregator: &RouteTemperatureAggregator<P>,
    states: &[String],
    candidates: &[Date],
    recommend_fn: F,
) -> Vec<DateCandidate>
where
    P: TemperatureProvider,
    F: Fn(f64) -> TruckCategory,
{
    let mut evaluated = Vec::with_capacity(candidates.len());
    for &date in candidates {
        let temperatures = aggregator.aggregate(states, Some(date)).await;
        match temperatures.average() {
            Some(average) => evaluated.push(DateCandidate {
                date,
                average_temperature: average,
                category: recommend_fn(average),
            }),
            None => tracing::debug!(%date, "no temperature data for candidate date"),
        }
    }
    evaluated
}

pub async fn optimal_date<P, F>(
    aggregator: &RouteTemperatureAggregator<P>,
    states: &[String],
    candidates: &[Date],
    recommend_fn: F,
) -> Option<DateCandidate>
where
    P: TemperatureProvider,
    F: Fn(f64) -> TruckCategory,
{
    let evaluated = evaluate_dates(aggregator, states, candidates, recommend_fn).await;
    select_optimal(evaluated, ComfortBand::DEFAULT.midpoint())
}

/// Picks the candidate closest to `target`. On a tie the earlier candidate
/// is kept.
pub fn select_optimal(
    candidates: impl IntoIterator<Item = DateCandidate>,
    target: f64,
) -> Option<DateCandidate> {
    let mut best: Option<DateCandidate> = None;

    for candidate in candidates {
        let distance = (candidate.average_temperature - target).abs();
        if best
            .as_ref()
            .map(|current| distance < (current.average_temperature - target).abs())
            .unwrap_or(true)
        {
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        recommendation::recommend,
        temperature::FetchFailure,
        test_support::{states, ScriptedProvider},
    };
    use time::macros::date;

    fn candidate(date: Date, average: f64) -> DateCandidate {
        DateCandidate {
            date,
            average_temperature: average,
            category: recommend(average),
        }
    }

    #[test]
    fn picks_closest_to_midpoint() {
        let best = select_optimal(
            [
                candidate(date!(2026 - 10 - 19), 38.0),
                candidate(date!(2026 - 10 - 20), 52.0),
                candidate(date!(2026 - 10 - 21), 61.0),
            ],
            50.0,
        )
        .unwrap();

        assert_eq!(best.date, date!(2026 - 10 - 20));
        assert_eq!(best.category, TruckCategory::Standard);
    }

    #[test]
    fn first_candidate_wins_ties() {
        let best = select_optimal(
            [
                candidate(date!(2026 - 10 - 19), 47.0),
                candidate(date!(2026 - 10 - 20), 53.0),
            ],
            50.0,
        )
        .unwrap();

        assert_eq!(best.date, date!(2026 - 10 - 19));
    }

    #[test]
    fn nothing_to_select() {
        assert!(select_optimal(Vec::new(), 50.0).is_none());
    }

    #[tokio::test]
    async fn optimizer_evaluates_each_date_through_the_aggregator() {
        let (d1, d2, d3) = (
            date!(2026 - 10 - 19),
            date!(2026 - 10 - 20),
            date!(2026 - 10 - 21),
        );
        let provider = ScriptedProvider::default()
            .with_average_on("Maine", d1, 36.0)
            .with_average_on("Ohio", d1, 40.0)
            .with_average_on("Maine", d2, 50.0)
            .with_average_on("Ohio", d2, 54.0)
            .with_average_on("Maine", d3, 60.0)
            .with_average_on("Ohio", d3, 62.0);
        let aggregator = RouteTemperatureAggregator::new(provider);

        let best = optimal_date(&aggregator, &states(&["Maine", "Ohio"]), &[d1, d2, d3], recommend)
            .await
            .unwrap();

        assert_eq!(best.date, d2);
        assert_eq!(best.average_temperature, 52.0);
        assert_eq!(aggregator.provider().calls(), 6);
    }

    #[tokio::test]
    async fn dates_without_data_are_skipped() {
        let provider = ScriptedProvider::default().with_failure(
            "Maine",
            FetchFailure::NoReadingsForDate(date!(2026 - 10 - 19)),
        );
        let aggregator = RouteTemperatureAggregator::new(provider);

        let best = optimal_date(
            &aggregator,
            &states(&["Maine"]),
            &[date!(2026 - 10 - 19)],
            recommend,
        )
        .await;

        assert!(best.is_none());
    }

    #[tokio::test]
    async fn no_candidates_means_no_comparison() {
        let aggregator = RouteTemperatureAggregator::new(ScriptedProvider::default());
        let best = optimal_date(&aggregator, &states(&["Maine"]), &[], recommend).await;
        assert!(best.is_none());
        assert_eq!(aggregator.provider().calls(), 0);
    }
}
