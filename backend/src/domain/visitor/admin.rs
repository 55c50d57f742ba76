//! Admin visitor: reshuffles shipment statuses and profile messages.
//!
//! Both visits pick a value uniformly at random, persist the change, write one
//! activity record and return [`VisitResult::Empty`]. The borrowed entity is
//! only updated once the save has succeeded.

use async_trait::async_trait;

use super::{
    VisitContext, VisitResult, Visitor, map_shipment_repository_error, map_user_repository_error,
};
use crate::domain::ports::RandomSource;
use crate::domain::{Error, Shipment, ShipmentStatus, User};

/// Statuses an admin visit may assign, in selection order.
pub const SHIPMENT_STATUSES: [&str; 4] = ["Processing", "Shipped", "Delivered", "Returned"];

/// Profile messages an admin visit may assign, in selection order.
pub const MOTIVATIONAL_QUOTES: [&str; 3] = [
    "Keep up the great work!",
    "You are doing an amazing job!",
    "Keep pushing forward!",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdminVisitor;

fn pick<'a>(options: &[&'a str], random: &dyn RandomSource) -> Result<&'a str, Error> {
    let index = random.pick(options.len());
    options.get(index).copied().ok_or_else(|| {
        Error::internal(format!(
            "random source returned index {index} for {} options",
            options.len()
        ))
    })
}

#[async_trait]
impl Visitor for AdminVisitor {
    async fn visit_shipment(
        &self,
        shipment: &mut Shipment,
        ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error> {
        let status = ShipmentStatus::new(pick(&SHIPMENT_STATUSES, ctx.random)?);
        let updated = shipment.with_status(status);
        ctx.shipments
            .save(&updated)
            .await
            .map_err(map_shipment_repository_error)?;
        *shipment = updated;

        ctx.activity.info(&format!(
            "Shipment {} status randomly updated to '{}' by Admin.",
            shipment.tracking_number(),
            shipment.status()
        ));
        Ok(VisitResult::Empty)
    }

    async fn visit_user(
        &self,
        user: &mut User,
        ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error> {
        let quote = pick(&MOTIVATIONAL_QUOTES, ctx.random)?;
        let updated = user.with_profile_message(quote);
        ctx.users
            .save(&updated)
            .await
            .map_err(map_user_repository_error)?;
        *user = updated;

        ctx.activity.info(&format!(
            "Admin updated User {}'s profile with a motivational message: '{quote}'.",
            user.name()
        ));
        Ok(VisitResult::Empty)
    }
}
