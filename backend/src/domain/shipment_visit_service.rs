//! Shipment visit domain service.
//!
//! Implements the driving ports behind `GET /shipments/{id}`: load the entity,
//! pick the role visitor from the viewer's claim and let it act. The service
//! owns no state beyond its collaborators, so one instance serves every
//! request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    ActivityLog, RandomSource, ShipmentQuery, ShipmentRepository, ShipmentView,
    ShowShipmentRequest, UserRepository, UserVisitCommand, UserVisitView, ViewerRoleQuery,
    VisitUserRequest,
};
use crate::domain::visitor::{map_shipment_repository_error, map_user_repository_error};
use crate::domain::{Error, UserId, VisitContext, Visitable, select_visitor};

/// Service implementing [`ShipmentQuery`], [`UserVisitCommand`] and
/// [`ViewerRoleQuery`].
#[derive(Clone)]
pub struct ShipmentVisitService<S, U> {
    shipments: Arc<S>,
    users: Arc<U>,
    random: Arc<dyn RandomSource>,
    activity: Arc<dyn ActivityLog>,
}

impl<S, U> ShipmentVisitService<S, U> {
    /// Create a new service with the given collaborators.
    pub fn new(
        shipments: Arc<S>,
        users: Arc<U>,
        random: Arc<dyn RandomSource>,
        activity: Arc<dyn ActivityLog>,
    ) -> Self {
        Self {
            shipments,
            users,
            random,
            activity,
        }
    }
}

impl<S, U> ShipmentVisitService<S, U>
where
    S: ShipmentRepository,
    U: UserRepository,
{
    fn context(&self) -> VisitContext<'_> {
        VisitContext {
            shipments: self.shipments.as_ref(),
            users: self.users.as_ref(),
            random: self.random.as_ref(),
            activity: self.activity.as_ref(),
        }
    }
}

#[async_trait]
impl<S, U> ShipmentQuery for ShipmentVisitService<S, U>
where
    S: ShipmentRepository,
    U: UserRepository,
{
    async fn show_shipment(&self, request: &ShowShipmentRequest) -> Result<ShipmentView, Error> {
        let mut shipment = self
            .shipments
            .find_by_id(&request.shipment_id)
            .await
            .map_err(map_shipment_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("shipment {} not found", request.shipment_id))
            })?;

        let visitor = select_visitor(request.role.as_deref());
        debug!(
            shipment_id = %request.shipment_id,
            role = %visitor.role(),
            "visiting shipment"
        );
        let status = shipment.accept(&visitor, &self.context()).await?;
        Ok(ShipmentView { shipment, status })
    }
}

#[async_trait]
impl<S, U> UserVisitCommand for ShipmentVisitService<S, U>
where
    S: ShipmentRepository,
    U: UserRepository,
{
    async fn visit_user(&self, request: &VisitUserRequest) -> Result<UserVisitView, Error> {
        let mut user = self
            .users
            .find_by_id(&request.user_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| Error::not_found(format!("user {} not found", request.user_id)))?;

        let visitor = select_visitor(request.role.as_deref());
        debug!(user_id = %request.user_id, role = %visitor.role(), "visiting user");
        let result = user.accept(&visitor, &self.context()).await?;
        Ok(UserVisitView { user, result })
    }
}

#[async_trait]
impl<S, U> ViewerRoleQuery for ShipmentVisitService<S, U>
where
    S: ShipmentRepository,
    U: UserRepository,
{
    async fn current_role(&self, user_id: &UserId) -> Result<Option<String>, Error> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(map_user_repository_error)?;
        match user {
            Some(user) => Ok(Some(user.role().to_owned())),
            None => {
                warn!(%user_id, "session user no longer exists; treating viewer as guest");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
#[path = "shipment_visit_service_tests.rs"]
mod tests;
