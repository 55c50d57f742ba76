//! In-process repositories used when no database is configured.
//!
//! Records live in a mutex-guarded map. Saves replace the whole record and fail
//! with a query error for unknown ids, matching the Diesel adapters.

mod shipment_repository;
mod user_repository;

pub use shipment_repository::InMemoryShipmentRepository;
pub use user_repository::InMemoryUserRepository;
