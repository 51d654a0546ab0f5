use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{doc, oid::ObjectId, to_document},
    options::ReturnDocument,
};
use tracing::{debug, info, instrument};

use crate::{
    models::{DbFlight, FlightChanges},
    storage::{FlightStore, Storage, StoreError, parse_object_id},
};

#[derive(Debug)]
pub struct MongoDBStorage {
    client: Client,
    db_name: String,
    flights_collection: String,
}

impl MongoDBStorage {
    pub async fn new(
        uri: &str,
        db_name: impl Into<String>,
        flights_collection: impl Into<String>,
    ) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        let storage = Self {
            client,
            db_name: db_name.into(),
            flights_collection: flights_collection.into(),
        };

        info!(
            db = %storage.db_name,
            collection = %storage.flights_collection,
            "MongoDB client configured"
        );

        Ok(storage)
    }

    fn get_db(&self) -> Database {
        self.client.database(&self.db_name)
    }

    fn flights(&self) -> Collection<DbFlight> {
        self.get_db().collection::<DbFlight>(&self.flights_collection)
    }
}

#[async_trait]
impl Storage for MongoDBStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        self.get_db().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[async_trait]
impl FlightStore for MongoDBStorage {
    #[instrument(skip(self))]
    async fn create(&self, mut flight: DbFlight) -> Result<DbFlight, StoreError> {
        let id = ObjectId::new();
        flight.id = Some(id);

        self.flights().insert_one(&flight).await?;
        debug!(%id, "Flight inserted");

        Ok(flight)
    }

    async fn list(&self) -> Result<Vec<DbFlight>, StoreError> {
        self.flights()
            .find(doc! {})
            .await?
            .try_collect()
            .await
            .map_err(StoreError::MongoDB)
    }

    async fn get(&self, id: &str) -> Result<Option<DbFlight>, StoreError> {
        let oid = parse_object_id(id)?;
        Ok(self.flights().find_one(doc! { "_id": oid }).await?)
    }

    #[instrument(skip(self))]
    async fn update(
        &self,
        id: &str,
        changes: FlightChanges,
    ) -> Result<Option<DbFlight>, StoreError> {
        let oid = parse_object_id(id)?;

        // An empty $set is rejected by the server.
        if changes.is_empty() {
            return FlightStore::get(self, id).await;
        }

        let set = to_document(&changes)?;

        Ok(self
            .flights()
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let oid = parse_object_id(id)?;
        let result = self.flights().delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}
