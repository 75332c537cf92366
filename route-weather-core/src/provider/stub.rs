//! Deterministic in-memory provider for tests.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::{
    error::ProviderError,
    model::LocationKey,
    provider::{
        CurrentObservation, DailyForecast, DailyForecastResponse, DayPart, GeoPosition,
        LocationCandidate, Measurement, ObservedTemperature, TemperatureRange, Wind,
    },
};

use super::WeatherProvider;

/// Every lookup is recorded as `"<lookup>:<argument>"`, e.g. `"forecast:294021"`.
/// Registering the same string with [`StubProvider::failing`] makes that call
/// return a 503 status error instead.
#[derive(Debug, Default)]
pub(crate) struct StubProvider {
    places: HashMap<String, String>,
    positions: HashMap<String, String>,
    current: HashMap<String, (f64, String)>,
    forecasts: HashMap<String, Vec<DailyForecast>>,
    failures: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, key: &str) -> Self {
        self.places.insert(name.to_string(), key.to_string());
        self
    }

    pub fn with_position(mut self, latitude: f64, longitude: f64, key: &str) -> Self {
        self.positions
            .insert(format!("{latitude},{longitude}"), key.to_string());
        self
    }

    pub fn with_current(mut self, key: &str, celsius: f64, text: &str) -> Self {
        self.current
            .insert(key.to_string(), (celsius, text.to_string()));
        self
    }

    /// Forecast values are imperial, as the real provider sends them.
    pub fn with_forecast(
        mut self,
        key: &str,
        min_f: f64,
        max_f: f64,
        wind_mph: f64,
        precipitation: u8,
    ) -> Self {
        let day = DailyForecast {
            date: None,
            temperature: TemperatureRange {
                minimum: measurement(min_f, "F"),
                maximum: measurement(max_f, "F"),
            },
            day: DayPart {
                wind: Wind {
                    speed: measurement(wind_mph, "mi/h"),
                },
                precipitation_probability: precipitation,
            },
        };
        self.forecasts.insert(key.to_string(), vec![day]);
        self
    }

    pub fn with_empty_forecast(mut self, key: &str) -> Self {
        self.forecasts.insert(key.to_string(), Vec::new());
        self
    }

    pub fn failing(mut self, call: &str) -> Self {
        self.failures.insert(call.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, lookup: &'static str, arg: &str) -> Result<(), ProviderError> {
        let call = format!("{lookup}:{arg}");
        let fail = self.failures.contains(&call);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        if fail {
            return Err(ProviderError::Status {
                lookup,
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "stub failure".to_string(),
            });
        }
        Ok(())
    }
}

fn measurement(value: f64, unit: &str) -> Measurement {
    Measurement {
        value,
        unit: Some(unit.to_string()),
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn autocomplete(&self, query: &str) -> Result<Vec<LocationCandidate>, ProviderError> {
        self.record("autocomplete", query)?;

        Ok(self
            .places
            .get(query)
            .map(|key| {
                vec![LocationCandidate {
                    key: key.clone(),
                    localized_name: query.to_string(),
                }]
            })
            .unwrap_or_default())
    }

    async fn geoposition(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<GeoPosition, ProviderError> {
        let position = format!("{latitude},{longitude}");
        self.record("geoposition", &position)?;

        Ok(GeoPosition {
            key: self.positions.get(&position).cloned(),
            localized_name: None,
        })
    }

    async fn current_conditions(
        &self,
        key: &LocationKey,
    ) -> Result<Vec<CurrentObservation>, ProviderError> {
        self.record("current", key.as_str())?;

        Ok(self
            .current
            .get(key.as_str())
            .map(|(celsius, text)| {
                vec![CurrentObservation {
                    temperature: ObservedTemperature {
                        metric: measurement(*celsius, "C"),
                    },
                    weather_text: text.clone(),
                }]
            })
            .unwrap_or_default())
    }

    async fn daily_forecast(
        &self,
        key: &LocationKey,
    ) -> Result<DailyForecastResponse, ProviderError> {
        self.record("forecast", key.as_str())?;

        Ok(DailyForecastResponse {
            daily_forecasts: self.forecasts.get(key.as_str()).cloned().unwrap_or_default(),
        })
    }
}
