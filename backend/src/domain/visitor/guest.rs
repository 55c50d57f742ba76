//! Guest visitor: read-only and deliberately less informative than customers.
//!
//! Guests see a shipment's status but only the numeric id of a user.

use async_trait::async_trait;

use super::{VisitContext, VisitResult, Visitor};
use crate::domain::{Error, Shipment, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuestVisitor;

#[async_trait]
impl Visitor for GuestVisitor {
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
        Ok(VisitResult::Id(user.id().get()))
    }
}
