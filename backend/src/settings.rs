//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COURIER_*` environment variables and an
//! optional configuration file, in increasing order of precedence. Every field
//! is optional; accessors supply the defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DEMO_PASSWORD: &str = "password";

/// Runtime configuration for the courier service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURIER")]
pub struct AppSettings {
    /// Interface to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// PostgreSQL URL; in-memory repositories are used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Load the demo users and shipments at startup.
    pub seed_demo_data: Option<bool>,
    /// Password shared by every demo account.
    pub demo_password: Option<String>,
}

impl AppSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn seed_demo_data(&self) -> bool {
        self.seed_demo_data.unwrap_or(true)
    }

    pub fn demo_password(&self) -> &str {
        self.demo_password
            .as_deref()
            .unwrap_or(DEFAULT_DEMO_PASSWORD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "COURIER_HOST",
        "COURIER_PORT",
        "COURIER_DATABASE_URL",
        "COURIER_DB_MAX_CONNECTIONS",
        "COURIER_SEED_DEMO_DATA",
        "COURIER_DEMO_PASSWORD",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("courier")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("addr"));
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections(), 10);
        assert!(settings.seed_demo_data());
        assert_eq!(settings.demo_password(), "password");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("COURIER_HOST", Some("127.0.0.1".to_owned())),
            ("COURIER_PORT", Some("9090".to_owned())),
            (
                "COURIER_DATABASE_URL",
                Some("postgres://localhost/courier".to_owned()),
            ),
            ("COURIER_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("COURIER_SEED_DEMO_DATA", Some("false".to_owned())),
            ("COURIER_DEMO_PASSWORD", Some("hunter2".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            "127.0.0.1:9090".parse().expect("addr")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/courier")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert!(!settings.seed_demo_data());
        assert_eq!(settings.demo_password(), "hunter2");
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([("COURIER_DATABASE_URL", Some("   ".to_owned()))]);
        assert!(load_from_empty_args().database_url().is_none());
    }
}
