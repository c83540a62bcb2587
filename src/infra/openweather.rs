//! Thin asynchronous client for the OpenWeatherMap 2.5 API.
//!
//! - `weather` for the instantaneous reading, `forecast` for the 5-day/3-hour series.
//! - One request per lookup: no retries and no caching.
//! - Every failure is reported as a [`FetchFailure`] instead of an error.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use time::{Date, OffsetDateTime};

use crate::config::{Config, ConfigError};
use crate::domain::{
    FetchFailure, ForecastWindow, RoutePlanner, RouteTemperatureAggregator, TemperatureProvider,
    TemperatureSummary,
};

const USER_AGENT: &str = concat!("route-temp-planner/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum WeatherClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: Url,
    api_key: String,
    window: ForecastWindow,
}

impl OpenWeatherClient {
    /// Builds a client from configuration. Fails before any request when the
    /// API key is missing. Forecast days are answered inside `window` and on
    /// its calendar.
    pub fn new(config: &Config, window: ForecastWindow) -> Result<Self, WeatherClientError> {
        let api_key = config.api_key()?.to_string();
        let base_url = Url::parse(&config.weather_base_url)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
            window,
        })
    }

    pub fn window(&self) -> &ForecastWindow {
        &self.window
    }

    pub async fn current(&self, latitude: f64, longitude: f64) -> Result<TemperatureSummary, FetchFailure> {
        let url = self.url("weather", latitude, longitude)?;
        let response: CurrentDto = self.fetch_json(url).await?;
        response
            .main
            .temp
            .filter(|temp| temp.is_finite())
            .map(TemperatureSummary::instantaneous)
            .ok_or_else(|| FetchFailure::Unavailable("response missing temperature".into()))
    }

    pub async fn forecast_for(
        &self,
        latitude: f64,
        longitude: f64,
        target: Date,
    ) -> Result<TemperatureSummary, FetchFailure> {
        if !self.window.contains(target) {
            return Err(FetchFailure::OutsideHorizon(target));
        }

        let url = self.url("forecast", latitude, longitude)?;
        let response: ForecastDto = self.fetch_json(url).await?;
        let readings = readings_on(&response, &self.window, target);

        tracing::debug!(
            latitude,
            longitude,
            %target,
            entries = response.list.len(),
            matched = readings.len(),
            "forecast filtered"
        );

        TemperatureSummary::from_readings(&readings).ok_or(FetchFailure::NoReadingsForDate(target))
    }

    async fn fetch_json<T>(&self, url: Url) -> Result<T, FetchFailure>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| FetchFailure::Unavailable(describe(&err)))?;

        response
            .json::<T>()
            .await
            .map_err(|err| FetchFailure::Unavailable(format!("failed to decode response: {err}")))
    }

    fn url(&self, path: &str, latitude: f64, longitude: f64) -> Result<Url, FetchFailure> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| FetchFailure::Unavailable(format!("invalid URL: {err}")))?;
        url.query_pairs_mut()
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("appid", &self.api_key)
            .append_pair("units", "imperial");
        Ok(url)
    }
}

#[async_trait]
impl TemperatureProvider for OpenWeatherClient {
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        target: Option<Date>,
    ) -> Result<TemperatureSummary, FetchFailure> {
        match target {
            Some(date) => self.forecast_for(latitude, longitude, date).await,
            None => self.current(latitude, longitude).await,
        }
    }
}

/// Wires a live client into a planner whose window starts today. Client and
/// planner share the one window.
pub fn build_planner(config: &Config) -> Result<RoutePlanner<OpenWeatherClient>, WeatherClientError> {
    planner_with_window(
        config,
        ForecastWindow::starting_today(config.forecast_horizon_days),
    )
}

pub fn planner_with_window(
    config: &Config,
    window: ForecastWindow,
) -> Result<RoutePlanner<OpenWeatherClient>, WeatherClientError> {
    let client = OpenWeatherClient::new(config, window)?;
    let aggregator =
        RouteTemperatureAggregator::new(client).with_max_concurrent(config.max_concurrent_requests);
    Ok(RoutePlanner::new(aggregator, window).with_lookahead(config.lookahead_days))
}

/// Never echo the request URL: it carries the API key.
fn describe(err: &reqwest::Error) -> String {
    match err.status() {
        Some(status) => format!("HTTP {status}"),
        None if err.is_timeout() => "request timed out".to_string(),
        None if err.is_connect() => "connection failed".to_string(),
        None => "request failed".to_string(),
    }
}

/// Temperatures whose timestamp falls on `target` in the window's calendar.
fn readings_on(forecast: &ForecastDto, window: &ForecastWindow, target: Date) -> Vec<f64> {
    forecast
        .list
        .iter()
        .filter_map(|entry| {
            let at = OffsetDateTime::from_unix_timestamp(entry.dt).ok()?;
            (window.date_of(at) == target)
                .then_some(entry.main.temp)
                .flatten()
        })
        .collect()
}

#[derive(Debug, Deserialize)]
struct MainDto {
    #[serde(default)]
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CurrentDto {
    main: MainDto,
}

#[derive(Debug, Deserialize)]
struct ForecastEntryDto {
    dt: i64,
    main: MainDto,
}

#[derive(Debug, Deserialize)]
struct ForecastDto {
    #[serde(default)]
    list: Vec<ForecastEntryDto>,
}
