use crate::{
    Config,
    error::ProviderError,
    model::LocationKey,
    provider::accuweather::AccuWeatherProvider,
};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt::Debug;

pub mod accuweather;

#[cfg(test)]
pub(crate) mod stub;

/// The four remote lookups the engine needs from a weather provider.
///
/// Records are returned in the provider's own shape and units; resolving,
/// conversion and classification happen in the layers above.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Free-text place search. Candidates come back best match first.
    async fn autocomplete(&self, query: &str) -> Result<Vec<LocationCandidate>, ProviderError>;

    /// Reverse geocoding of a coordinate pair.
    async fn geoposition(&self, latitude: f64, longitude: f64)
    -> Result<GeoPosition, ProviderError>;

    async fn current_conditions(
        &self,
        key: &LocationKey,
    ) -> Result<Vec<CurrentObservation>, ProviderError>;

    async fn daily_forecast(&self, key: &LocationKey)
    -> Result<DailyForecastResponse, ProviderError>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationCandidate {
    pub key: String,
    #[serde(default)]
    pub localized_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeoPosition {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub localized_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Measurement {
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObservedTemperature {
    pub metric: Measurement,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CurrentObservation {
    pub temperature: ObservedTemperature,
    pub weather_text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureRange {
    pub minimum: Measurement,
    pub maximum: Measurement,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Wind {
    pub speed: Measurement,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DayPart {
    pub wind: Wind,
    pub precipitation_probability: u8,
}

/// One day of forecast, in imperial units.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyForecast {
    #[serde(default)]
    pub date: Option<DateTime<FixedOffset>>,
    pub temperature: TemperatureRange,
    pub day: DayPart,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DailyForecastResponse {
    /// Missing and empty lists are treated the same.
    #[serde(default)]
    pub daily_forecasts: Vec<DailyForecast>,
}

/// Construct the AccuWeather provider from config.
///
/// Fails when no API key is configured; this is a startup error, not a
/// per-request one.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.require_api_key()?;

    let provider = AccuWeatherProvider::new(
        api_key.to_owned(),
        &config.base_url,
        &config.language,
        config.timeout(),
    )
    .context("Failed to build HTTP client for AccuWeather")?;

    Ok(Box::new(provider))
}
