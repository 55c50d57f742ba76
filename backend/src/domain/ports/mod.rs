//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, randomness, the activity trail) are implemented
//! by outbound adapters. Driving ports (queries, commands, login) are
//! implemented by domain services and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod activity_log;
mod login_service;
mod random_source;
mod shipment_query;
mod shipment_repository;
mod user_repository;
mod user_visit_command;
mod viewer_role_query;

#[cfg(test)]
pub use activity_log::MockActivityLog;
pub use activity_log::ActivityLog;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use random_source::MockRandomSource;
pub use random_source::{FixedRandomSource, RandomSource};
#[cfg(test)]
pub use shipment_query::MockShipmentQuery;
pub use shipment_query::{ShipmentQuery, ShipmentView, ShowShipmentRequest};
#[cfg(test)]
pub use shipment_repository::MockShipmentRepository;
pub use shipment_repository::{ShipmentRepository, ShipmentRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use user_visit_command::MockUserVisitCommand;
pub use user_visit_command::{UserVisitCommand, UserVisitView, VisitUserRequest};
#[cfg(test)]
pub use viewer_role_query::MockViewerRoleQuery;
pub use viewer_role_query::ViewerRoleQuery;
