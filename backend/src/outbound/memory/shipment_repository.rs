use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ShipmentRepository, ShipmentRepositoryError};
use crate::domain::{Shipment, ShipmentId};

/// Mutex-guarded map implementing [`ShipmentRepository`].
#[derive(Debug, Default)]
pub struct InMemoryShipmentRepository {
    shipments: Mutex<HashMap<ShipmentId, Shipment>>,
}

impl InMemoryShipmentRepository {
    pub fn new(shipments: impl IntoIterator<Item = Shipment>) -> Self {
        let shipments = shipments
            .into_iter()
            .map(|shipment| (shipment.id(), shipment))
            .collect();
        Self {
            shipments: Mutex::new(shipments),
        }
    }

    /// Copy of the stored shipment, bypassing the port.
    pub fn snapshot(&self, id: ShipmentId) -> Option<Shipment> {
        self.lock().ok()?.get(&id).cloned()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ShipmentId, Shipment>>, ShipmentRepositoryError> {
        self.shipments
            .lock()
            .map_err(|_| ShipmentRepositoryError::connection("shipment store lock poisoned"))
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn find_by_id(
        &self,
        id: &ShipmentId,
    ) -> Result<Option<Shipment>, ShipmentRepositoryError> {
        Ok(self.lock()?.get(id).cloned())
    }

    async fn save(&self, shipment: &Shipment) -> Result<(), ShipmentRepositoryError> {
        let mut shipments = self.lock()?;
        match shipments.get_mut(&shipment.id()) {
            Some(stored) => {
                *stored = shipment.clone();
                Ok(())
            }
            None => Err(ShipmentRepositoryError::query(format!(
                "shipment {} does not exist",
                shipment.id()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShipmentStatus;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryShipmentRepository {
        let id = ShipmentId::new(1).expect("valid id");
        InMemoryShipmentRepository::new([Shipment::builder(id, "TN1").status("Shipped").build()])
    }

    #[rstest]
    #[tokio::test]
    async fn save_replaces_stored_record(repo: InMemoryShipmentRepository) {
        let id = ShipmentId::new(1).expect("valid id");
        let stored = repo.find_by_id(&id).await.expect("lookup").expect("present");

        repo.save(&stored.with_status(ShipmentStatus::new("Returned")))
            .await
            .expect("save");

        let reloaded = repo.snapshot(id).expect("present");
        assert_eq!(reloaded.status().as_str(), "Returned");
    }

    #[rstest]
    #[tokio::test]
    async fn saving_unknown_shipment_is_a_query_error(repo: InMemoryShipmentRepository) {
        let id = ShipmentId::new(9).expect("valid id");
        let err = repo
            .save(&Shipment::builder(id, "TN9").build())
            .await
            .expect_err("unknown id");
        assert!(matches!(err, ShipmentRepositoryError::Query { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_ids_are_none(repo: InMemoryShipmentRepository) {
        let id = ShipmentId::new(2).expect("valid id");
        assert!(repo.find_by_id(&id).await.expect("lookup").is_none());
    }
}
