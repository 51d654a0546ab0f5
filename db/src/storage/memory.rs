use std::collections::BTreeMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use parking_lot::RwLock;

use crate::{
    models::{DbFlight, FlightChanges},
    storage::{FlightStore, Storage, StoreError, parse_object_id},
};

/// Process-local storage backend.
///
/// Ids are real `ObjectId`s so flights look the same as they would coming
/// out of MongoDB. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    flights: RwLock<BTreeMap<ObjectId, DbFlight>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl FlightStore for MemoryStorage {
    async fn create(&self, mut flight: DbFlight) -> Result<DbFlight, StoreError> {
        let id = ObjectId::new();
        flight.id = Some(id);
        self.flights.write().insert(id, flight.clone());
        Ok(flight)
    }

    async fn list(&self) -> Result<Vec<DbFlight>, StoreError> {
        Ok(self.flights.read().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<DbFlight>, StoreError> {
        let oid = parse_object_id(id)?;
        Ok(self.flights.read().get(&oid).cloned())
    }

    async fn update(
        &self,
        id: &str,
        changes: FlightChanges,
    ) -> Result<Option<DbFlight>, StoreError> {
        let oid = parse_object_id(id)?;
        let mut flights = self.flights.write();

        Ok(flights.get_mut(&oid).map(|flight| {
            changes.apply(flight);
            flight.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let oid = parse_object_id(id)?;
        Ok(self.flights.write().remove(&oid).is_some())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::DbSchedule;

    use super::*;

    fn flight(number: &str) -> DbFlight {
        DbFlight {
            id: None,
            aircraft: "CSTRC".into(),
            flight_number: number.into(),
            schedule: DbSchedule {
                std: "2025-02-15T14:30:00Z".into(),
                sta: "2025-02-15T17:30:00Z".into(),
            },
            departure: "LPPD".into(),
            destination: "LPLA".into(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_get_returns_it() {
        let store = MemoryStorage::new();

        let created = store.create(flight("AVIO201")).await.unwrap();
        let id = created.external_id();
        assert_eq!(id.len(), 24);

        let fetched = store.get(&id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_list_returns_flights_in_creation_order() {
        let store = MemoryStorage::new();
        store.create(flight("A1")).await.unwrap();
        store.create(flight("A2")).await.unwrap();

        let numbers: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.flight_number)
            .collect();
        assert_eq!(numbers, vec!["A1", "A2"]);
    }

    #[tokio::test]
    async fn test_update_returns_post_update_document() {
        let store = MemoryStorage::new();
        let id = store.create(flight("AVIO201")).await.unwrap().external_id();

        let changes = FlightChanges {
            departure: Some("EBCI".into()),
            ..Default::default()
        };
        let updated = store.update(&id, changes).await.unwrap().unwrap();

        assert_eq!(updated.departure, "EBCI");
        assert_eq!(updated.flight_number, "AVIO201");
        assert_eq!(store.get(&id).await.unwrap().unwrap().departure, "EBCI");
    }

    #[tokio::test]
    async fn test_update_missing_flight_returns_none() {
        let store = MemoryStorage::new();
        let missing = ObjectId::new().to_hex();

        let result = store.update(&missing, FlightChanges::default()).await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let store = MemoryStorage::new();
        let id = store.create(flight("AVIO201")).await.unwrap().external_id();

        assert!(store.delete(&id).await.unwrap());
        assert!(!store.delete(&id).await.unwrap());
        assert!(store.get(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let store = MemoryStorage::new();

        assert!(matches!(
            store.get("not-an-id").await,
            Err(StoreError::InvalidId(_))
        ));
    }
}
