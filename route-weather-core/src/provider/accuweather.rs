use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    error::ProviderError,
    model::LocationKey,
    provider::{CurrentObservation, DailyForecastResponse, GeoPosition, LocationCandidate},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct AccuWeatherProvider {
    api_key: String,
    base_url: String,
    language: String,
    http: Client,
}

impl AccuWeatherProvider {
    pub fn new(
        api_key: String,
        base_url: &str,
        language: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
            http,
        })
    }

    /// GET `path` with the credential attached and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        lookup: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(lookup, %url, "sending AccuWeather request");

        let mut params = vec![("apikey", self.api_key.as_str())];
        params.extend_from_slice(query);

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|source| transport(lookup, source))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| transport(lookup, source))?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                lookup,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ProviderError::Decode { lookup, source })
    }
}

#[async_trait]
impl WeatherProvider for AccuWeatherProvider {
    async fn autocomplete(&self, query: &str) -> Result<Vec<LocationCandidate>, ProviderError> {
        self.get_json(
            "autocomplete",
            "/locations/v1/cities/autocomplete",
            &[("q", query), ("language", self.language.as_str())],
        )
        .await
    }

    async fn geoposition(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeoPosition, ProviderError> {
        let position = format!("{latitude},{longitude}");

        self.get_json(
            "geoposition",
            "/locations/v1/cities/geoposition/search",
            &[("q", position.as_str()), ("language", self.language.as_str())],
        )
        .await
    }

    async fn current_conditions(
        &self,
        key: &LocationKey,
    ) -> Result<Vec<CurrentObservation>, ProviderError> {
        let path = format!("/currentconditions/v1/{key}");

        self.get_json(
            "current conditions",
            &path,
            &[("language", self.language.as_str()), ("details", "true")],
        )
        .await
    }

    async fn daily_forecast(
        &self,
        key: &LocationKey,
    ) -> Result<DailyForecastResponse, ProviderError> {
        let path = format!("/forecasts/v1/daily/1day/{key}");

        self.get_json(
            "daily forecast",
            &path,
            &[("language", self.language.as_str()), ("details", "true")],
        )
        .await
    }
}

/// The request URL carries the API key, so it is stripped from the error.
fn transport(lookup: &'static str, source: reqwest::Error) -> ProviderError {
    ProviderError::Transport {
        lookup,
        source: source.without_url(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
