//! Role visitors: the role-specific behaviour applied to entities.
//!
//! Each role has one stateless visitor. Collaborators a visit needs
//! (repositories, randomness, the activity trail) travel in a
//! [`VisitContext`] so visitors can be selected without any wiring.
//!
//! ```text
//! role claim -> Role::from_claim -> RoleVisitor -> visit_shipment / visit_user
//! ```

mod admin;
mod customer;
mod guest;

pub use admin::{AdminVisitor, MOTIVATIONAL_QUOTES, SHIPMENT_STATUSES};
pub use customer::CustomerVisitor;
pub use guest::GuestVisitor;

use async_trait::async_trait;
use serde::Serialize;

use super::ports::{
    ActivityLog, RandomSource, ShipmentRepository, ShipmentRepositoryError, UserRepository,
    UserRepositoryError,
};
use super::{Error, Role, Shipment, User};

/// Value a visit hands back to the presentation layer.
///
/// Serialises as a JSON string, number or `null` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VisitResult {
    /// A shipment status or a profile message.
    Text(String),
    /// A user identifier.
    Id(i64),
    /// Nothing meaningful to show (mutating visits, absent values).
    Empty,
}

impl VisitResult {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<&str>> for VisitResult {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Empty, |text| Self::Text(text.to_owned()))
    }
}

/// Collaborators available to a visit.
#[derive(Clone, Copy)]
pub struct VisitContext<'a> {
    pub shipments: &'a dyn ShipmentRepository,
    pub users: &'a dyn UserRepository,
    pub random: &'a dyn RandomSource,
    pub activity: &'a dyn ActivityLog,
}

/// Capability set shared by every role visitor.
#[async_trait]
pub trait Visitor: Send + Sync {
    /// Apply role behaviour to a shipment.
    async fn visit_shipment(
        &self,
        shipment: &mut Shipment,
        ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error>;

    /// Apply role behaviour to a user.
    async fn visit_user(&self, user: &mut User, ctx: &VisitContext<'_>)
    -> Result<VisitResult, Error>;
}

/// Entities that dispatch themselves to the matching visitor method.
#[async_trait]
pub trait Visitable: Send {
    async fn accept<V>(&mut self, visitor: &V, ctx: &VisitContext<'_>) -> Result<VisitResult, Error>
    where
        V: Visitor + ?Sized;
}

#[async_trait]
impl Visitable for Shipment {
    async fn accept<V>(&mut self, visitor: &V, ctx: &VisitContext<'_>) -> Result<VisitResult, Error>
    where
        V: Visitor + ?Sized,
    {
        visitor.visit_shipment(self, ctx).await
    }
}

#[async_trait]
impl Visitable for User {
    async fn accept<V>(&mut self, visitor: &V, ctx: &VisitContext<'_>) -> Result<VisitResult, Error>
    where
        V: Visitor + ?Sized,
    {
        visitor.visit_user(self, ctx).await
    }
}

/// Closed set of role visitors, one per [`Role`].
///
/// # Examples
/// ```
/// use courier::domain::{Role, RoleVisitor};
///
/// assert_eq!(RoleVisitor::Customer.role(), Role::Customer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleVisitor {
    Admin,
    Customer,
    Guest,
}

impl RoleVisitor {
    pub fn role(self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Customer => Role::Customer,
            Self::Guest => Role::Guest,
        }
    }

    fn delegate(self) -> &'static dyn Visitor {
        match self {
            Self::Admin => &AdminVisitor,
            Self::Customer => &CustomerVisitor,
            Self::Guest => &GuestVisitor,
        }
    }
}

#[async_trait]
impl Visitor for RoleVisitor {
    async fn visit_shipment(
        &self,
        shipment: &mut Shipment,
        ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error> {
        self.delegate().visit_shipment(shipment, ctx).await
    }

    async fn visit_user(
        &self,
        user: &mut User,
        ctx: &VisitContext<'_>,
    ) -> Result<VisitResult, Error> {
        self.delegate().visit_user(user, ctx).await
    }
}

pub(crate) fn map_shipment_repository_error(error: ShipmentRepositoryError) -> Error {
    match error {
        ShipmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("shipment repository unavailable: {message}"))
        }
        ShipmentRepositoryError::Query { message } => {
            Error::internal(format!("shipment repository error: {message}"))
        }
    }
}

pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}
