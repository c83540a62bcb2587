use async_trait::async_trait;
use time::Date;

use super::temperature::{FetchFailure, TemperatureSummary};

/// Source of temperature summaries for a point.
///
/// `target = None` asks for the current reading; `Some(date)` asks for the
/// forecast readings on that calendar day. Implementations never panic and
/// report every failure through [`FetchFailure`].
#[async_trait]
pub trait TemperatureProvider: Send + Sync {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        target: Option<Date>,
    ) -> Result<TemperatureSummary, FetchFailure>;

    /// Same as [`fetch`](Self::fetch) with the failure reason dropped.
    async fn fetch_summary(
        &self,
        latitude: f64,
        longitude: f64,
        target: Option<Date>,
    ) -> Option<TemperatureSummary> {
        self.fetch(latitude, longitude, target).await.ok()
    }
}

