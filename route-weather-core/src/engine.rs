use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::{
    Config,
    assessor,
    error::{EngineError, FetchError},
    fetcher::ConditionsFetcher,
    model::{Endpoint, EndpointRole, WeatherAssessment},
    provider::{WeatherProvider, provider_from_config},
    resolver::LocationResolver,
};

/// Drives resolve → fetch → assess for both ends of a route.
///
/// Endpoints are processed strictly one after the other, start first, and the
/// first failure ends the evaluation.
#[derive(Debug, Clone)]
pub struct WeatherEngine {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherEngine {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn evaluate(
        &self,
        start: &Endpoint,
        end: &Endpoint,
    ) -> Result<(WeatherAssessment, WeatherAssessment), EngineError> {
        let start = self.evaluate_endpoint(EndpointRole::Start, start).await?;
        let end = self.evaluate_endpoint(EndpointRole::End, end).await?;
        Ok((start, end))
    }

    #[instrument(skip_all, fields(%role, %endpoint))]
    async fn evaluate_endpoint(
        &self,
        role: EndpointRole,
        endpoint: &Endpoint,
    ) -> Result<WeatherAssessment, EngineError> {
        endpoint.validate(role)?;

        let provider = self.provider.as_ref();

        let key = LocationResolver::new(provider)
            .resolve(endpoint)
            .await
            .ok_or(EngineError::UnresolvedLocation { role })?;

        let fetcher = ConditionsFetcher::new(provider);

        let current = fetcher
            .fetch_temperature(&key)
            .await
            .map_err(|source| upstream(role, source))?;

        let forecast = fetcher
            .fetch_forecast(&key)
            .await
            .map_err(|source| upstream(role, source))?
            .ok_or(EngineError::IncompleteData { role })?;

        let assessment = assessor::assess(&current, &forecast);
        info!(
            %key,
            summary = %assessment.overall_summary,
            flag = assessment.active_flag(),
            "endpoint assessed"
        );

        Ok(assessment)
    }
}

fn upstream(role: EndpointRole, source: FetchError) -> EngineError {
    error!(%role, error = %source, "weather data request failed");
    EngineError::UpstreamFailure { role, source }
}

/// Construct the engine backed by the configured provider.
pub fn engine_from_config(config: &Config) -> anyhow::Result<WeatherEngine> {
    let provider = provider_from_config(config)?;
    Ok(WeatherEngine::new(Arc::from(provider)))
}
