//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: mutex-guarded repositories for database-less runs and tests.
//! - **random**: `SmallRng`-backed random source.
//! - **activity_log**: activity trail written through `tracing`.
//!
//! Adapters translate between domain types and infrastructure; they hold no
//! business rules.

pub mod activity_log;
pub mod demo_data;
pub mod memory;
pub mod persistence;
pub mod random;
