//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the shipment, session and health endpoints together
//! with the response schemas they reference. Swagger UI serves it in debug
//! builds and `openapi-dump` prints it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::shipments::{ShipmentResponse, ShipmentViewResponse};
use crate::inbound::http::users::LoginRequest;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Courier shipment API",
        description = "Role-dependent shipment views, demo sessions and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::shipments::show_shipment,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        ShipmentResponse,
        ShipmentViewResponse,
        LoginRequest
    )),
    tags(
        (name = "shipments", description = "Shipment display by viewer role"),
        (name = "users", description = "Demo session management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
