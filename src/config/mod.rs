use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_PORT: u16 = 4310;
const DEFAULT_NAMESPACE: &str = "shared";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Server configuration, merged from CLI/env flags, an optional TOML file,
/// and built-in defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Bind address for the HTTP server (default: "127.0.0.1").
    pub bind_address: String,
    pub log: String,
    /// Log output format: "pretty" (default) | "json".
    pub log_format: String,
    /// Tee logs to this file, rotated daily. None = stdout only.
    pub log_file: Option<PathBuf>,
    /// Firebase Realtime Database base URL (e.g. `https://myapp.firebaseio.com`).
    /// None means the server runs on the in-memory store.
    pub database_url: Option<String>,
    /// Database secret sent as the `auth` query parameter
    /// (DAYLIST_DATABASE_SECRET env var or `database_secret` in the TOML file).
    pub database_secret: Option<String>,
    /// Namespace the date-only routes read and write
    /// (`/{date}` is served as `/{default_namespace}/{date}`).
    pub default_namespace: String,
}

impl ServerConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `--config` (default: ./daylist.toml)
    ///   3. Built-in defaults
    pub fn new(
        config_path: Option<PathBuf>,
        port: Option<u16>,
        bind_address: Option<String>,
        log: Option<String>,
        log_file: Option<PathBuf>,
        database_url: Option<String>,
    ) -> Self {
        let config_path = config_path.unwrap_or_else(|| PathBuf::from("daylist.toml"));
        let toml = load_toml(&config_path).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log_format = std::env::var("DAYLIST_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let log_file = log_file.or(toml.log_file);

        let database_url = database_url
            .or(toml.database_url)
            .filter(|s| !s.is_empty());

        let database_secret = std::env::var("DAYLIST_DATABASE_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.database_secret);

        let default_namespace = std::env::var("DAYLIST_NAMESPACE")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.default_namespace)
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        Self {
            port,
            bind_address,
            log,
            log_format,
            log_file,
            database_url,
            database_secret,
            default_namespace,
        }
    }
}

/// `daylist.toml` shape. Every field is optional; missing fields fall
/// through to the next priority layer.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
    log_format: Option<String>,
    log_file: Option<PathBuf>,
    database_url: Option<String>,
    database_secret: Option<String>,
    default_namespace: Option<String>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config file — using defaults");
            None
        }
    }
}
