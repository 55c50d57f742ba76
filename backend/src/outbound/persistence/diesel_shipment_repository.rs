//! PostgreSQL-backed `ShipmentRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ShipmentRepository, ShipmentRepositoryError};
use crate::domain::{Shipment, ShipmentId};

use super::error_mapping::StoreFailure;
use super::models::{ShipmentRow, ShipmentUpdate};
use super::pool::DbPool;
use super::schema::shipments;

/// Diesel-backed implementation of the [`ShipmentRepository`] port.
#[derive(Clone)]
pub struct DieselShipmentRepository {
    pool: DbPool,
}

impl DieselShipmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: impl Into<StoreFailure>) -> ShipmentRepositoryError {
    failure.into().into_port_error(
        ShipmentRepositoryError::connection,
        ShipmentRepositoryError::query,
    )
}

fn row_to_shipment(row: ShipmentRow) -> Result<Shipment, ShipmentRepositoryError> {
    let id = ShipmentId::new(row.id).map_err(|err| {
        ShipmentRepositoryError::query(format!("stored shipment {}: {err}", row.id))
    })?;
    Ok(Shipment::builder(id, row.tracking_number)
        .sender(row.sender)
        .receiver(row.receiver)
        .status(row.status)
        .build())
}

#[async_trait]
impl ShipmentRepository for DieselShipmentRepository {
    async fn find_by_id(
        &self,
        id: &ShipmentId,
    ) -> Result<Option<Shipment>, ShipmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        let row: Option<ShipmentRow> = shipments::table
            .find(id.get())
            .select(ShipmentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(to_port_error)?;

        row.map(row_to_shipment).transpose()
    }

    async fn save(&self, shipment: &Shipment) -> Result<(), ShipmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        let update = ShipmentUpdate {
            tracking_number: shipment.tracking_number(),
            sender: shipment.sender(),
            receiver: shipment.receiver(),
            status: shipment.status().as_str(),
        };
        let updated = diesel::update(shipments::table.find(shipment.id().get()))
            .set(&update)
            .execute(&mut conn)
            .await
            .map_err(to_port_error)?;

        if updated == 0 {
            return Err(ShipmentRepositoryError::query(format!(
                "shipment {} does not exist",
                shipment.id()
            )));
        }
        debug!(shipment_id = %shipment.id(), status = %shipment.status(), "shipment saved");
        Ok(())
    }
}
