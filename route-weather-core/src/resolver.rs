//! Maps an [`Endpoint`] to the provider's location key.
//!
//! Lookup failures of any kind (transport, status, decode) are logged and
//! reported as "no location". They never propagate past this module.

use tracing::{debug, warn};

use crate::{
    model::{Endpoint, LocationKey},
    provider::WeatherProvider,
};

#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'a> {
    provider: &'a dyn WeatherProvider,
}

impl<'a> LocationResolver<'a> {
    pub fn new(provider: &'a dyn WeatherProvider) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self, endpoint: &Endpoint) -> Option<LocationKey> {
        let key = match endpoint {
            Endpoint::ByName(name) => self.by_name(name).await,
            Endpoint::ByCoordinates { latitude, longitude } => {
                self.by_coordinates(*latitude, *longitude).await
            }
        };

        match &key {
            Some(key) => debug!(%endpoint, %key, "resolved location key"),
            None => debug!(%endpoint, "location could not be resolved"),
        }
        key
    }

    async fn by_name(&self, name: &str) -> Option<LocationKey> {
        match self.provider.autocomplete(name).await {
            Ok(candidates) => candidates
                .into_iter()
                .next()
                .map(|candidate| LocationKey::new(candidate.key)),
            Err(err) => {
                warn!(address = name, error = %err, "location lookup by name failed");
                None
            }
        }
    }

    async fn by_coordinates(&self, latitude: f64, longitude: f64) -> Option<LocationKey> {
        match self.provider.geoposition(latitude, longitude).await {
            Ok(position) => position.key.map(LocationKey::new),
            Err(err) => {
                warn!(latitude, longitude, error = %err, "location lookup by coordinates failed");
                None
            }
        }
    }
}
