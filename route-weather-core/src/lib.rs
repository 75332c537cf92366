//! Core library for the `route-weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider (AccuWeather over HTTP)
//! - Location resolution, forecast fetching and unit conversion
//! - Classification of a forecast as favorable or unfavorable
//! - The engine that evaluates both ends of a route
//!
//! It is used by `route-weather-cli`, but can also be reused by other binaries or services.

pub mod assessor;
pub mod config;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod provider;
pub mod resolver;

pub use config::Config;
pub use engine::{WeatherEngine, engine_from_config};
pub use error::{EngineError, FetchError, ProviderError};
pub use model::{
    Endpoint, EndpointRole, ForecastReading, LocationKey, Summary, TemperatureReading,
    WeatherAssessment,
};
pub use provider::WeatherProvider;
