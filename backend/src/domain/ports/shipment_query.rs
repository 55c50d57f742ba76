//! Driving port for the "show shipment" use case.
//!
//! The HTTP adapter resolves the viewer's role claim, then asks this port to
//! load the shipment, run the matching role visitor against it and hand back
//! what should be displayed.

use async_trait::async_trait;

use crate::domain::{Error, Shipment, ShipmentId, VisitResult};

/// Request to display one shipment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowShipmentRequest {
    pub shipment_id: ShipmentId,
    /// Raw role claim of the viewer; `None` for anonymous visitors.
    pub role: Option<String>,
}

/// Outcome of a shipment visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentView {
    /// The shipment as it stands after the visit.
    pub shipment: Shipment,
    /// Value returned by the visitor.
    pub status: VisitResult,
}

/// Domain use-case port for showing a shipment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShipmentQuery: Send + Sync {
    /// Load the shipment and apply the visitor selected for `request.role`.
    ///
    /// Fails with `not_found` when the shipment does not exist.
    async fn show_shipment(&self, request: &ShowShipmentRequest) -> Result<ShipmentView, Error>;
}
