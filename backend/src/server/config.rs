//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use courier::outbound::persistence::DbPool;

const DEFAULT_DEMO_PASSWORD: &str = "password";

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) demo_password: String,
}

impl ServerConfig {
    /// Construct a server configuration backed by in-memory storage.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            demo_password: DEFAULT_DEMO_PASSWORD.to_owned(),
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, shipments and users are read from and written to
    /// PostgreSQL instead of the in-memory demo store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Set the password shared by the demo accounts.
    #[must_use]
    pub fn with_demo_password(mut self, password: impl Into<String>) -> Self {
        self.demo_password = password.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
