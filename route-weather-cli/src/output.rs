use std::fmt::{self, Write as _};

use route_weather_core::{Endpoint, EndpointRole, WeatherAssessment};

/// Human-readable block for one side of the route.
pub fn render(
    role: EndpointRole,
    endpoint: &Endpoint,
    weather: &WeatherAssessment,
) -> Result<String, fmt::Error> {
    let mut out = String::new();

    let title = match role {
        EndpointRole::Start => "Start",
        EndpointRole::End => "End",
    };
    writeln!(out, "{title}: {endpoint}")?;

    if let Some(date) = weather.forecast_date {
        writeln!(out, "  Forecast for:  {}", date.format("%Y-%m-%d"))?;
    }
    writeln!(
        out,
        "  Temperature:   {:.1}..{:.1} °C",
        weather.min_temperature, weather.max_temperature
    )?;
    writeln!(out, "  Wind:          {:.1} km/h", weather.wind_speed)?;
    writeln!(out, "  Precipitation: {}%", weather.precipitation_probability)?;
    if let Some(flag) = weather.active_flag() {
        writeln!(out, "  Warning:       {flag}")?;
    }
    writeln!(out, "  Overall:       {}", weather.overall_summary)?;

    Ok(out)
}

pub fn to_json(start: &WeatherAssessment, end: &WeatherAssessment) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "start": start,
        "end": end,
    }))
}
