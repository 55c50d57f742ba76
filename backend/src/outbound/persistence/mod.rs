//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows (`models.rs`, `schema.rs`) and
//! domain entities; neither leaks past this module. Connections come from a
//! `bb8` pool driven by `diesel-async`.
//!
//! ```ignore
//! use courier::outbound::persistence::{DbPool, DieselShipmentRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/courier")).await?;
//! let shipments = DieselShipmentRepository::new(pool);
//! ```

mod bootstrap;
mod diesel_shipment_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod pool;
mod schema;

pub use bootstrap::{BootstrapError, run_migrations, seed_demo_data};
pub use diesel_shipment_repository::DieselShipmentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
