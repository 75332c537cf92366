use tracing::debug;

use crate::{
    error::FetchError,
    model::{ForecastReading, LocationKey, TemperatureReading},
    provider::WeatherProvider,
};

const MPH_TO_KMH: f64 = 1.61;

/// Retrieves current conditions and the one-day forecast for a location key.
///
/// Unlike [`crate::resolver::LocationResolver`], failures here are returned to
/// the caller.
#[derive(Debug, Clone, Copy)]
pub struct ConditionsFetcher<'a> {
    provider: &'a dyn WeatherProvider,
}

impl<'a> ConditionsFetcher<'a> {
    pub fn new(provider: &'a dyn WeatherProvider) -> Self {
        Self { provider }
    }

    pub async fn fetch_temperature(
        &self,
        key: &LocationKey,
    ) -> Result<TemperatureReading, FetchError> {
        let observations = self.provider.current_conditions(key).await?;

        let first = observations
            .into_iter()
            .next()
            .ok_or(FetchError::MissingData("current conditions"))?;

        debug!(%key, temperature = first.temperature.metric.value, "fetched current conditions");

        Ok(TemperatureReading {
            current_value: first.temperature.metric.value,
            current_description: first.weather_text,
        })
    }

    /// `Ok(None)` when the provider answered with no forecast days.
    pub async fn fetch_forecast(
        &self,
        key: &LocationKey,
    ) -> Result<Option<ForecastReading>, FetchError> {
        let response = self.provider.daily_forecast(key).await?;

        let Some(day) = response.daily_forecasts.into_iter().next() else {
            debug!(%key, "daily forecast list is empty");
            return Ok(None);
        };

        let reading = ForecastReading {
            min_temperature: fahrenheit_to_celsius(day.temperature.minimum.value),
            max_temperature: fahrenheit_to_celsius(day.temperature.maximum.value),
            wind_speed: mph_to_kmh(day.day.wind.speed.value),
            precipitation_probability: day.day.precipitation_probability,
            forecast_date: day.date,
        };

        debug!(%key, ?reading, "fetched daily forecast");
        Ok(Some(reading))
    }
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round2((fahrenheit - 32.0) * 5.0 / 9.0)
}

pub fn mph_to_kmh(mph: f64) -> f64 {
    round2(mph * MPH_TO_KMH)
}

/// Rounds by the exact decimal expansion of `value`: 6.5 mph is 10.4649.. km/h
/// in binary and becomes 10.46, not 10.47.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
