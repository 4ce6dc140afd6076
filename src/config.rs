use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::LazyLock;
use url::Url;

/// Application configuration managed by Figment.
///
/// Values come from environment variables prefixed with `GITVIEW_`,
/// merged over the serialized defaults below. `dotenvy` loads `.env`
/// before extraction (see `main.rs`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server listen address. Env: `GITVIEW_LISTEN_ADDR`.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: IpAddr,

    /// HTTP server listen port. Env: `GITVIEW_LISTEN_PORT`.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// SQLite database URL. Env: `GITVIEW_DATABASE_URL`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Log level for tracing subscriber initialization when `RUST_LOG`
    /// is unset. Env: `GITVIEW_LOGLEVEL`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Optional egress proxy for GitHub API requests. Env: `GITVIEW_PROXY`.
    #[serde(default)]
    pub proxy: Option<Url>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            listen_port: default_listen_port(),
            database_url: default_database_url(),
            loglevel: default_loglevel(),
            proxy: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("GITVIEW_"))
            .extract()
            .unwrap_or_else(|err| panic!("failed to extract configuration from environment: {err}"))
    }
}

fn default_listen_addr() -> IpAddr {
    Ipv4Addr::new(0, 0, 0, 0).into()
}

fn default_listen_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite:gitview.db".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

/// Global, lazily-initialized configuration instance.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);
