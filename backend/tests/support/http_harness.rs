//! Server harness for HTTP behaviour suites.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. The server runs over the in-memory
//! demo stores with a fixed random source; dropping the fixture stops it.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Key, SameSite, time::Duration as CookieDuration};
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use courier::Trace;
use courier::domain::ports::{
    FixedRandomSource, LoginService, ShipmentQuery, ViewerRoleQuery,
};
use courier::domain::{DemoLoginService, ShipmentVisitService};
use courier::inbound::http::configure_routes;
use courier::inbound::http::state::HttpState;
use courier::outbound::demo_data::{demo_shipments, demo_users};
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use crate::visit_doubles::{
    CountingShipmentRepository, CountingUserRepository, RecordingActivityLog,
};

pub(crate) const DEMO_PASSWORD: &str = "password";
pub(crate) const ADMIN_RANDOM_INDEX: usize = 1;

pub(crate) struct HttpWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) shipments: Arc<CountingShipmentRepository>,
    pub(crate) activity: Arc<RecordingActivityLog>,
    pub(crate) session_cookie: Option<String>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) last_body: Option<Value>,
}

pub(crate) type SharedWorld = Rc<RefCell<HttpWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

/// Run `operation` against the server; the future must not borrow the world.
pub(crate) fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(PersistentSession::default().session_ttl(CookieDuration::hours(2)))
        .build()
}

fn http_state(
    shipments: Arc<CountingShipmentRepository>,
    users: Arc<CountingUserRepository>,
    activity: Arc<RecordingActivityLog>,
) -> HttpState {
    let visits = Arc::new(ShipmentVisitService::new(
        shipments,
        users.clone(),
        Arc::new(FixedRandomSource::new(ADMIN_RANDOM_INDEX)),
        activity,
    ));
    let login: Arc<dyn LoginService> = Arc::new(DemoLoginService::new(users, DEMO_PASSWORD));
    let query: Arc<dyn ShipmentQuery> = visits.clone();
    let roles: Arc<dyn ViewerRoleQuery> = visits;
    HttpState::new(query, roles, login)
}

async fn spawn_server(state: HttpState) -> Result<(String, ServerHandle), String> {
    let key = Key::generate();
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(session_middleware(key.clone()))
            .wrap(Trace)
            .configure(configure_routes)
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let shipments = Arc::new(CountingShipmentRepository::new(demo_shipments()));
    let users = Arc::new(CountingUserRepository::new(demo_users()));
    let activity = Arc::new(RecordingActivityLog::default());
    let state = http_state(shipments.clone(), users, activity.clone());

    let (base_url, server) = local
        .block_on(&runtime, async { spawn_server(state).await })
        .expect("server should start");

    let world = Rc::new(RefCell::new(HttpWorld {
        runtime,
        local,
        base_url,
        server,
        shipments,
        activity,
        session_cookie: None,
        last_status: None,
        last_trace_id: None,
        last_body: None,
    }));

    WorldFixture { world }
}
