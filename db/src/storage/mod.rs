use std::fmt::Debug;

use async_trait::async_trait;
use ::mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::models::{DbFlight, FlightChanges};

pub mod memory;
pub mod mongodb;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Query Error: {0}")]
    MongoDB(#[from] ::mongodb::error::Error),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] ::mongodb::bson::ser::Error),

    #[error(transparent)]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[async_trait]
pub trait Storage: FlightStore + Debug + Send + Sync + 'static {
    async fn ping(&self) -> Result<(), StoreError>;
}

#[async_trait]
pub trait FlightStore {
    /// Persist a new flight and return it with its assigned id.
    async fn create(&self, flight: DbFlight) -> Result<DbFlight, StoreError>;

    async fn list(&self) -> Result<Vec<DbFlight>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<DbFlight>, StoreError>;

    /// Apply `changes` and return the flight as it is after the update, or
    /// `None` if no flight has this id.
    async fn update(
        &self,
        id: &str,
        changes: FlightChanges,
    ) -> Result<Option<DbFlight>, StoreError>;

    /// Returns whether a flight was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}

/// Translate an external flight id into the document id it was derived from.
pub fn parse_object_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}
