//! Courier backend library: role-based shipment views behind an Actix API.
//!
//! - `domain`: entities, visitors, ports and services.
//! - `inbound`: HTTP adapter.
//! - `outbound`: PostgreSQL, in-memory, random and activity-log adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
