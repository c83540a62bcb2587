//! Route temperature aggregation and truck recommendation live here.

pub mod aggregator;
pub mod coordinates;
pub mod optimizer;
pub mod planner;
pub mod provider;
pub mod recommendation;
pub mod route;
pub mod savings;
pub mod session;
pub mod temperature;
pub mod window;

#[cfg(test)]
pub(crate) mod test_support;

#[allow(unused_imports)]
pub use aggregator::{RouteTemperatureAggregator, DEFAULT_MAX_CONCURRENT_REQUESTS};
#[allow(unused_imports)]
pub use coordinates::StateCoordinate;
#[allow(unused_imports)]
pub use optimizer::{evaluate_dates, optimal_date, select_optimal, DateCandidate};
#[allow(unused_imports)]
pub use planner::{RoutePlan, RoutePlanner};
#[allow(unused_imports)]
pub use provider::TemperatureProvider;
#[allow(unused_imports)]
pub use recommendation::{
    recommend, recommend_in, recommendation_for, ComfortBand, RecommendationResult, TruckCategory,
};
#[allow(unused_imports)]
pub use route::{find_route, split_state_list, RouteRecord, DEFAULT_ORIGIN};
#[allow(unused_imports)]
pub use savings::{compute_savings, CostComparison, SavingsLedger, SavingsRecord, CONTROLLED_PREMIUM};
#[allow(unused_imports)]
pub use session::Session;
#[allow(unused_imports)]
pub use temperature::{
    FetchFailure, RouteTemperatureResult, StateReading, StateTemperature, TemperatureSummary,
};
#[allow(unused_imports)]
pub use window::{init_local_offset, ForecastWindow, DEFAULT_HORIZON_DAYS, DEFAULT_LOOKAHEAD_DAYS};
