//! Shipment display endpoint.
//!
//! ```text
//! GET /shipments/{id}
//! ```
//!
//! The viewer's role comes from the session user. Anonymous viewers, unknown
//! users and unrecognised roles all get the guest view.

use actix_web::{get, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::{ShipmentView, ShowShipmentRequest};
use crate::domain::{Error, Shipment, ShipmentId, VisitResult};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Shipment fields as rendered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "TN1")]
    pub tracking_number: String,
    pub sender: String,
    pub receiver: String,
    #[schema(example = "Shipped")]
    pub status: String,
}

impl From<Shipment> for ShipmentResponse {
    fn from(shipment: Shipment) -> Self {
        Self {
            id: shipment.id().get(),
            tracking_number: shipment.tracking_number().to_owned(),
            sender: shipment.sender().to_owned(),
            receiver: shipment.receiver().to_owned(),
            status: shipment.status().as_str().to_owned(),
        }
    }
}

/// Response body for `GET /shipments/{id}`.
///
/// `status` is whatever the role visitor returned: a string for read-only
/// roles and `null` after an admin reshuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShipmentViewResponse {
    pub shipment: ShipmentResponse,
    #[schema(value_type = Object, example = "Shipped")]
    pub status: VisitResult,
}

impl From<ShipmentView> for ShipmentViewResponse {
    fn from(view: ShipmentView) -> Self {
        Self {
            shipment: view.shipment.into(),
            status: view.status,
        }
    }
}

fn parse_shipment_id(raw: &str) -> Result<ShipmentId, Error> {
    raw.parse::<ShipmentId>().map_err(|err| {
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "id", "value": raw }))
    })
}

async fn viewer_role(state: &HttpState, session: &SessionContext) -> Result<Option<String>, Error> {
    match session.user_id()? {
        Some(user_id) => state.viewer_roles.current_role(&user_id).await,
        None => Ok(None),
    }
}

/// Show a shipment through the viewer's role visitor.
#[utoipa::path(
    get,
    path = "/shipments/{id}",
    params(("id" = i64, Path, description = "Shipment identifier")),
    responses(
        (status = 200, description = "Shipment as seen by the viewer's role", body = ShipmentViewResponse),
        (status = 400, description = "Malformed shipment id", body = Error),
        (status = 404, description = "Unknown shipment", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Storage unavailable", body = Error)
    ),
    tags = ["shipments"],
    operation_id = "showShipment",
    security([])
)]
#[get("/shipments/{id}")]
pub async fn show_shipment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<ShipmentViewResponse>> {
    let shipment_id = parse_shipment_id(&path.into_inner())?;
    let role = viewer_role(&state, &session).await?;
    let view = state
        .shipments
        .show_shipment(&ShowShipmentRequest { shipment_id, role })
        .await?;
    Ok(web::Json(view.into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::UserId;
    use crate::domain::ports::{MockLoginService, MockShipmentQuery, MockViewerRoleQuery};
    use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
    use crate::inbound::http::users::login;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::Value;

    fn shipment() -> Shipment {
        Shipment::builder(ShipmentId::new(1).expect("valid id"), "TN1")
            .sender("Acme Widgets")
            .receiver("Ada Lovelace")
            .status("Shipped")
            .build()
    }

    fn state(
        shipments: MockShipmentQuery,
        roles: MockViewerRoleQuery,
        login_service: MockLoginService,
    ) -> HttpState {
        HttpState::new(Arc::new(shipments), Arc::new(roles), Arc::new(login_service))
    }

    fn query_expecting_role(role: Option<&'static str>) -> MockShipmentQuery {
        let mut shipments = MockShipmentQuery::new();
        shipments
            .expect_show_shipment()
            .times(1)
            .withf(move |request| request.role.as_deref() == role)
            .returning(|_| {
                Ok(ShipmentView {
                    shipment: shipment(),
                    status: VisitResult::Text("Shipped".to_owned()),
                })
            });
        shipments
    }

    #[actix_web::test]
    async fn anonymous_viewers_get_the_guest_view() {
        let mut roles = MockViewerRoleQuery::new();
        roles.expect_current_role().never();
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state(
                    query_expecting_role(None),
                    roles,
                    MockLoginService::new(),
                )))
                .service(show_shipment),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/shipments/1").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "Shipped");
        assert_eq!(body["shipment"]["trackingNumber"], "TN1");
    }

    #[actix_web::test]
    async fn logged_in_viewers_use_their_stored_role() {
        let mut login_service = MockLoginService::new();
        login_service
            .expect_authenticate()
            .times(1)
            .returning(|_| Ok(UserId::new(2).expect("valid id")));
        let mut roles = MockViewerRoleQuery::new();
        roles
            .expect_current_role()
            .times(1)
            .withf(|user_id| user_id.get() == 2)
            .returning(|_| Ok(Some("customer".to_owned())));
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state(
                    query_expecting_role(Some("customer")),
                    roles,
                    login_service,
                )))
                .service(login)
                .service(show_shipment),
        )
        .await;

        let login_response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/login")
                .set_json(serde_json::json!({
                    "email": "customer@example.com",
                    "password": "password"
                }))
                .to_request(),
        )
        .await;
        assert_eq!(login_response.status(), StatusCode::OK);
        let cookie = session_cookie(&login_response);

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/shipments/1")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("0")]
    #[case("-4")]
    #[case("abc")]
    #[case("1.5")]
    #[actix_web::test]
    async fn malformed_ids_are_rejected(#[case] raw: &str) {
        let mut shipments = MockShipmentQuery::new();
        shipments.expect_show_shipment().never();
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state(
                    shipments,
                    MockViewerRoleQuery::new(),
                    MockLoginService::new(),
                )))
                .service(show_shipment),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/shipments/{raw}"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "id");
    }

    #[rstest]
    #[case(Error::not_found("shipment 9 not found"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("syntax error"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[actix_web::test]
    async fn domain_failures_map_to_statuses(#[case] failure: Error, #[case] expected: StatusCode) {
        let mut shipments = MockShipmentQuery::new();
        shipments
            .expect_show_shipment()
            .times(1)
            .return_once(move |_| Err(failure));
        let app = test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state(
                    shipments,
                    MockViewerRoleQuery::new(),
                    MockLoginService::new(),
                )))
                .service(show_shipment),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/shipments/9").to_request(),
        )
        .await;
        assert_eq!(response.status(), expected);
    }

    #[rstest]
    #[::core::prelude::v1::test]
    fn admin_views_render_null_status() {
        let response = ShipmentViewResponse::from(ShipmentView {
            shipment: shipment(),
            status: VisitResult::Empty,
        });
        let value = serde_json::to_value(response).expect("serialise");
        assert!(value["status"].is_null());
        assert_eq!(value["shipment"]["status"], "Shipped");
    }
}
