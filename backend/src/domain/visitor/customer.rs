//! Customer visitor: read-only, sees statuses and profile messages.

use async_trait::async_trait;

use super::{VisitContext, VisitResult, Visitor};
use crate::domain::{Error, Shipment, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerVisitor;

#[async_trait]
impl Visitor for CustomerVisitor {
    async fn visit_shipment(
        &self,
        shipment: &mut Shipment,
        _ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error> {
        Ok(VisitResult::Text(shipment.status().as_str().to_owned()))
    }

    async fn visit_user(
        &self,
        user: &mut User,
        _ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error> {
        Ok(VisitResult::from(user.profile_message()))
    }
}
