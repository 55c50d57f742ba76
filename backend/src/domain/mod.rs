//! Domain primitives, role visitors and services.
//!
//! Purpose: model shipments and users, decide which role visitor handles a
//! request and run it against the entity. Nothing here knows about HTTP or
//! SQL; adapters talk to the domain through [`ports`].
//!
//! Public surface:
//! - `Shipment`, `User` and their identifiers.
//! - `Role`, `RoleVisitor`, `select_visitor` for handler selection.
//! - `Visitor`, `Visitable`, `VisitContext`, `VisitResult` for visits.
//! - `ShipmentVisitService`, `DemoLoginService` implementing driving ports.
//! - `Error`, `ErrorCode`, `TraceId` shared with the adapters.

pub mod auth;
pub mod demo_login_service;
pub mod error;
pub mod ports;
pub mod role;
pub mod shipment;
pub mod shipment_visit_service;
pub mod trace_id;
pub mod user;
pub mod visitor;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::demo_login_service::DemoLoginService;
pub use self::error::{Error, ErrorCode};
pub use self::role::{Role, select_visitor};
pub use self::shipment::{
    Shipment, ShipmentBuilder, ShipmentId, ShipmentStatus, ShipmentValidationError,
};
pub use self::shipment_visit_service::ShipmentVisitService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserBuilder, UserId, UserValidationError};
pub use self::visitor::{
    AdminVisitor, CustomerVisitor, GuestVisitor, MOTIVATIONAL_QUOTES, RoleVisitor,
    SHIPMENT_STATUSES, VisitContext, VisitResult, Visitable, Visitor,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use courier::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
