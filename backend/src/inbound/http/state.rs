//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, ShipmentQuery, ViewerRoleQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub shipments: Arc<dyn ShipmentQuery>,
    pub viewer_roles: Arc<dyn ViewerRoleQuery>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    pub fn new(
        shipments: Arc<dyn ShipmentQuery>,
        viewer_roles: Arc<dyn ViewerRoleQuery>,
        login: Arc<dyn LoginService>,
    ) -> Self {
        Self {
            shipments,
            viewer_roles,
            login,
        }
    }
}
