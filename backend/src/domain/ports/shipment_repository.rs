//! Driven port for shipment persistence.
//!
//! The data layer owns shipment records. Visitors borrow a loaded shipment for
//! one visit and write mutations back through [`ShipmentRepository::save`].

use async_trait::async_trait;

use crate::domain::{Shipment, ShipmentId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by shipment repository adapters.
    pub enum ShipmentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "shipment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "shipment repository query failed: {message}",
    }
}

/// Port for loading and saving shipments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Fetch a shipment by identifier; `None` when no record exists.
    async fn find_by_id(
        &self,
        id: &ShipmentId,
    ) -> Result<Option<Shipment>, ShipmentRepositoryError>;

    /// Persist the current field values of an existing shipment.
    ///
    /// Saving a shipment the store does not know about is a
    /// [`ShipmentRepositoryError::Query`] failure.
    async fn save(&self, shipment: &Shipment) -> Result<(), ShipmentRepositoryError>;
}
