//! Error taxonomy for provider calls, fetching and the engine.
//!
//! `EngineError` is what callers see. Its `Display` text is safe to show to an
//! end user; upstream detail is only reachable through `source()`.

use reqwest::StatusCode;
use thiserror::Error;

use crate::model::EndpointRole;

/// Failure of a single remote lookup.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send request to AccuWeather ({lookup}): {source}")]
    Transport {
        lookup: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("AccuWeather {lookup} request failed with status {status}: {body}")]
    Status {
        lookup: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse AccuWeather {lookup} JSON: {source}")]
    Decode {
        lookup: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure while fetching conditions or forecast for a resolved location.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Response contained no {0}")]
    MissingData(&'static str),
}

/// The single failure surfaced by one engine evaluation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid {role} point: {reason}")]
    InvalidRequest { role: EndpointRole, reason: String },

    #[error(
        "Could not determine the {role} location. Please check the entered address or coordinates."
    )]
    UnresolvedLocation { role: EndpointRole },

    #[error("Weather data for the {role} location is currently unavailable. Please try again.")]
    UpstreamFailure {
        role: EndpointRole,
        #[source]
        source: FetchError,
    },

    #[error("No forecast is available for the {role} location.")]
    IncompleteData { role: EndpointRole },
}

impl EngineError {
    pub fn role(&self) -> EndpointRole {
        match self {
            EngineError::InvalidRequest { role, .. }
            | EngineError::UnresolvedLocation { role }
            | EngineError::UpstreamFailure { role, .. }
            | EngineError::IncompleteData { role } => *role,
        }
    }
}
