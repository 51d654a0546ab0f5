use std::sync::Arc;

use axum::http::HeaderValue;
use flightdeck_db::storage::{Storage, memory::MemoryStorage, mongodb::MongoDBStorage};
use tracing::{info, warn};

use crate::{
    auth::{self, TokenIssuer, TokenVerifier},
    config::{ConfigError, FlightdeckApiConfig, MEMORY_STORAGE_URI},
};

/// Shared state handed to every handler. Immutable after startup.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<FlightdeckApiConfig>,
    pub cors_origin: HeaderValue,
    pub db: Arc<dyn Storage>,
    pub token_issuer: Arc<TokenIssuer>,
    pub token_verifier: Arc<TokenVerifier>,
}

impl ApiContext {
    /// Validate `config` and connect the storage backend it names.
    pub async fn new(config: FlightdeckApiConfig) -> anyhow::Result<Self> {
        let db: Arc<dyn Storage> = if config.mongodb_uri == MEMORY_STORAGE_URI {
            warn!("Using in-memory flight storage; data will not survive a restart");
            Arc::new(MemoryStorage::new())
        } else {
            Arc::new(
                MongoDBStorage::new(
                    &config.mongodb_uri,
                    &config.db_name,
                    &config.flights_collection,
                )
                .await?,
            )
        };

        Ok(Self::with_storage(config, db)?)
    }

    /// Build the context around an already constructed storage backend.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the authentication settings or the public
    /// url are invalid.
    pub fn with_storage(
        config: FlightdeckApiConfig,
        db: Arc<dyn Storage>,
    ) -> Result<Self, ConfigError> {
        let settings = config.auth_settings()?;
        let cors_origin = config
            .public_url
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidPublicUrl(config.public_url.clone()))?;

        info!(
            algorithm = ?settings.algorithm,
            ttl_secs = settings.ttl.as_secs(),
            username = settings.identity.username(),
            "Authentication configured"
        );

        let (issuer, verifier) = auth::build(settings);

        Ok(Self {
            config: Arc::new(config),
            cors_origin,
            db,
            token_issuer: Arc::new(issuer),
            token_verifier: Arc::new(verifier),
        })
    }
}
