//! HTTP inbound adapter.
//!
//! Handlers translate requests into driving-port calls and domain errors into
//! JSON responses; they hold no business rules.

use actix_web::web;

pub mod error;
pub mod health;
pub mod session;
pub mod session_config;
pub mod shipments;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

/// Register the application routes (shipment display, login, logout).
///
/// Callers wrap the app in session middleware and provide
/// `web::Data<HttpState>`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(shipments::show_shipment)
        .service(users::login)
        .service(users::logout);
}
