//! Classifies a forecast as favorable or unfavorable.
//!
//! Rules are checked in [`RULES`] order and the first match wins, so at most
//! one flag is set on an assessment.

use crate::model::{ForecastReading, Summary, TemperatureReading, WeatherAssessment};

pub const MIN_COMFORTABLE_C: f64 = 0.0;
pub const MAX_COMFORTABLE_C: f64 = 35.0;
pub const MAX_WIND_KMH: f64 = 50.0;
pub const MAX_PRECIPITATION_PCT: u8 = 70;

/// Which assessment field a rule writes to when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Temperature,
    Wind,
    Precipitation,
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: FlagKind,
    pub message: &'static str,
    pub breached: fn(&ForecastReading) -> bool,
}

pub const RULES: &[Rule] = &[
    Rule {
        kind: FlagKind::Temperature,
        message: "temperature unfavorable",
        breached: |f| {
            f.min_temperature < MIN_COMFORTABLE_C || f.max_temperature > MAX_COMFORTABLE_C
        },
    },
    Rule {
        kind: FlagKind::Wind,
        message: "strong wind",
        breached: |f| f.wind_speed > MAX_WIND_KMH,
    },
    Rule {
        kind: FlagKind::Precipitation,
        message: "high precipitation probability",
        breached: |f| f.precipitation_probability > MAX_PRECIPITATION_PCT,
    },
];

/// The current temperature is part of the contract but does not influence the
/// outcome; only forecast thresholds do.
pub fn assess(_current: &TemperatureReading, forecast: &ForecastReading) -> WeatherAssessment {
    let mut assessment = WeatherAssessment {
        min_temperature: forecast.min_temperature,
        max_temperature: forecast.max_temperature,
        wind_speed: forecast.wind_speed,
        precipitation_probability: forecast.precipitation_probability,
        temperature_flag: None,
        wind_flag: None,
        precipitation_flag: None,
        overall_summary: Summary::Favorable,
        forecast_date: forecast.forecast_date,
    };

    if let Some(rule) = RULES.iter().find(|rule| (rule.breached)(forecast)) {
        let flag = Some(rule.message.to_string());
        match rule.kind {
            FlagKind::Temperature => assessment.temperature_flag = flag,
            FlagKind::Wind => assessment.wind_flag = flag,
            FlagKind::Precipitation => assessment.precipitation_flag = flag,
        }
        assessment.overall_summary = Summary::Unfavorable;
    }

    assessment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> TemperatureReading {
        TemperatureReading {
            current_value: 20.0,
            current_description: "Sunny".to_string(),
        }
    }

    fn forecast(min: f64, max: f64, wind: f64, precip: u8) -> ForecastReading {
        ForecastReading {
            min_temperature: min,
            max_temperature: max,
            wind_speed: wind,
            precipitation_probability: precip,
            forecast_date: None,
        }
    }

    #[test]
    fn baseline_is_favorable() {
        let a = assess(&current(), &forecast(10.0, 25.0, 10.0, 20));

        assert_eq!(a.overall_summary, Summary::Favorable);
        assert!(a.temperature_flag.is_none());
        assert!(a.wind_flag.is_none());
        assert!(a.precipitation_flag.is_none());
        assert!(a.active_flag().is_none());
    }

    #[test]
    fn temperature_out_of_range() {
        let a = assess(&current(), &forecast(-5.0, 38.0, 10.0, 20));

        assert_eq!(a.temperature_flag.as_deref(), Some("temperature unfavorable"));
        assert_eq!(a.overall_summary, Summary::Unfavorable);
    }

    #[test]
    fn strong_wind() {
        let a = assess(&current(), &forecast(10.0, 25.0, 55.0, 20));

        assert_eq!(a.wind_flag.as_deref(), Some("strong wind"));
        assert!(a.temperature_flag.is_none());
        assert_eq!(a.overall_summary, Summary::Unfavorable);
    }

    #[test]
    fn high_precipitation() {
        let a = assess(&current(), &forecast(10.0, 25.0, 10.0, 80));

        assert_eq!(
            a.precipitation_flag.as_deref(),
            Some("high precipitation probability")
        );
        assert_eq!(a.overall_summary, Summary::Unfavorable);
    }

    #[test]
    fn temperature_suppresses_other_flags() {
        let a = assess(&current(), &forecast(10.0, 40.0, 80.0, 95));

        assert!(a.temperature_flag.is_some());
        assert!(a.wind_flag.is_none());
        assert!(a.precipitation_flag.is_none());
    }

    #[test]
    fn wind_suppresses_precipitation() {
        let a = assess(&current(), &forecast(10.0, 25.0, 51.0, 95));

        assert!(a.wind_flag.is_some());
        assert!(a.precipitation_flag.is_none());
    }

    #[test]
    fn thresholds_are_exclusive() {
        let a = assess(&current(), &forecast(0.0, 35.0, 50.0, 70));
        assert_eq!(a.overall_summary, Summary::Favorable);
    }

    #[test]
    fn favorable_across_comfortable_grid() {
        for min in [0.0, 7.5, 20.0, 35.0] {
            for max in [0.0, 18.0, 35.0] {
                for wind in [0.0, 25.0, 50.0] {
                    for precip in [0, 35, 70] {
                        let a = assess(&current(), &forecast(min, max, wind, precip));
                        assert_eq!(a.overall_summary, Summary::Favorable);
                        assert!(a.active_flag().is_none());
                    }
                }
            }
        }
    }

    #[test]
    fn exactly_one_flag_whenever_unfavorable() {
        for min in [-10.0, 5.0] {
            for max in [20.0, 36.0] {
                for wind in [10.0, 60.0] {
                    for precip in [10, 90] {
                        let a = assess(&current(), &forecast(min, max, wind, precip));
                        let set = [&a.temperature_flag, &a.wind_flag, &a.precipitation_flag]
                            .iter()
                            .filter(|f| f.is_some())
                            .count();
                        match a.overall_summary {
                            Summary::Favorable => assert_eq!(set, 0),
                            Summary::Unfavorable => assert_eq!(set, 1),
                        }
                        if min < 0.0 || max > 35.0 {
                            assert!(a.temperature_flag.is_some());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn rules_are_in_priority_order() {
        let kinds: Vec<_> = RULES.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![FlagKind::Temperature, FlagKind::Wind, FlagKind::Precipitation]
        );
    }
}
