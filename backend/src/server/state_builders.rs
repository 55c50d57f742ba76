//! Builders wiring storage adapters into the HTTP state.

use std::sync::Arc;

use courier::domain::ports::{
    ActivityLog, LoginService, RandomSource, ShipmentQuery, ShipmentRepository, UserRepository,
    ViewerRoleQuery,
};
use courier::domain::{DemoLoginService, ShipmentVisitService};
use courier::inbound::http::state::HttpState;
use courier::outbound::activity_log::TracingActivityLog;
use courier::outbound::demo_data::{demo_shipments, demo_users};
use courier::outbound::memory::{InMemoryShipmentRepository, InMemoryUserRepository};
use courier::outbound::persistence::{DieselShipmentRepository, DieselUserRepository};
use courier::outbound::random::SmallRngSource;

use super::ServerConfig;

/// Build the HTTP state, using PostgreSQL when a pool is configured and the
/// seeded in-memory store otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let random: Arc<dyn RandomSource> = Arc::new(SmallRngSource::from_entropy());
    let activity: Arc<dyn ActivityLog> = Arc::new(TracingActivityLog);

    match &config.db_pool {
        Some(pool) => http_state_for(
            Arc::new(DieselShipmentRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
            random,
            activity,
            &config.demo_password,
        ),
        None => http_state_for(
            Arc::new(InMemoryShipmentRepository::new(demo_shipments())),
            Arc::new(InMemoryUserRepository::new(demo_users())),
            random,
            activity,
            &config.demo_password,
        ),
    }
}

fn http_state_for<S, U>(
    shipments: Arc<S>,
    users: Arc<U>,
    random: Arc<dyn RandomSource>,
    activity: Arc<dyn ActivityLog>,
    demo_password: &str,
) -> HttpState
where
    S: ShipmentRepository + 'static,
    U: UserRepository + 'static,
{
    let visits = Arc::new(ShipmentVisitService::new(
        shipments,
        users.clone(),
        random,
        activity,
    ));
    let login: Arc<dyn LoginService> = Arc::new(DemoLoginService::new(users, demo_password));
    let query: Arc<dyn ShipmentQuery> = visits.clone();
    let roles: Arc<dyn ViewerRoleQuery> = visits;
    HttpState::new(query, roles, login)
}
