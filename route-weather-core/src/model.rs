use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;

/// Which side of the route an endpoint describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointRole {
    Start,
    End,
}

impl EndpointRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointRole::Start => "start",
            EndpointRole::End => "end",
        }
    }
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of the comparison, given either as a place name or as coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    ByName(String),
    ByCoordinates { latitude: f64, longitude: f64 },
}

impl Endpoint {
    /// Build an endpoint from raw optional inputs of a single side.
    ///
    /// A non-blank name takes precedence. Otherwise both coordinates must be
    /// present and parse as decimal degrees in range.
    pub fn from_parts(
        role: EndpointRole,
        name: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, EngineError> {
        if let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) {
            return Ok(Endpoint::ByName(name.to_string()));
        }

        let (Some(lat), Some(lon)) = (latitude, longitude) else {
            return Err(EngineError::InvalidRequest {
                role,
                reason: "either a place name or both coordinates are required".to_string(),
            });
        };

        let latitude = parse_degrees(role, "latitude", lat, 90.0)?;
        let longitude = parse_degrees(role, "longitude", lon, 180.0)?;

        Ok(Endpoint::ByCoordinates { latitude, longitude })
    }

    /// Check an already-built endpoint: the name must not be blank and the
    /// coordinates must be finite and in range.
    pub fn validate(&self, role: EndpointRole) -> Result<(), EngineError> {
        match self {
            Endpoint::ByName(name) if name.trim().is_empty() => Err(EngineError::InvalidRequest {
                role,
                reason: "place name is empty".to_string(),
            }),
            Endpoint::ByName(_) => Ok(()),
            Endpoint::ByCoordinates { latitude, longitude } => {
                check_degrees(role, "latitude", *latitude, 90.0)?;
                check_degrees(role, "longitude", *longitude, 180.0)?;
                Ok(())
            }
        }
    }
}

fn parse_degrees(
    role: EndpointRole,
    field: &str,
    raw: &str,
    limit: f64,
) -> Result<f64, EngineError> {
    let value: f64 = raw.trim().parse().map_err(|_| EngineError::InvalidRequest {
        role,
        reason: format!("{field} '{raw}' is not a decimal number"),
    })?;

    check_degrees(role, field, value, limit)
}

fn check_degrees(
    role: EndpointRole,
    field: &str,
    value: f64,
    limit: f64,
) -> Result<f64, EngineError> {
    if !value.is_finite() || value.abs() > limit {
        return Err(EngineError::InvalidRequest {
            role,
            reason: format!("{field} {value} is outside -{limit}..{limit}"),
        });
    }

    Ok(value)
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::ByName(name) => f.write_str(name),
            Endpoint::ByCoordinates { latitude, longitude } => {
                write!(f, "{latitude},{longitude}")
            }
        }
    }
}

/// Provider-assigned identifier of a resolved place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationKey(String);

impl LocationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Degrees Celsius.
    pub current_value: f64,
    pub current_description: String,
}

/// Converted one-day forecast. Temperatures in °C, wind in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReading {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub wind_speed: f64,
    pub precipitation_probability: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_date: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Summary {
    Favorable,
    Unfavorable,
}

impl Summary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Summary::Favorable => "favorable",
            Summary::Unfavorable => "unfavorable",
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified forecast for one endpoint. At most one flag is ever set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAssessment {
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub wind_speed: f64,
    pub precipitation_probability: u8,
    pub temperature_flag: Option<String>,
    pub wind_flag: Option<String>,
    pub precipitation_flag: Option<String>,
    pub overall_summary: Summary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_date: Option<DateTime<FixedOffset>>,
}

impl WeatherAssessment {
    /// The flag that made this assessment unfavorable, if any.
    pub fn active_flag(&self) -> Option<&str> {
        self.temperature_flag
            .as_deref()
            .or(self.wind_flag.as_deref())
            .or(self.precipitation_flag.as_deref())
    }
}
