use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Ayurakshak";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default bind address for the helpdesk HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Default LibreTranslate-compatible endpoint.
pub const DEFAULT_TRANSLATE_URL: &str = "http://localhost:5001";

/// Translation requests give up after this many seconds.
pub const DEFAULT_TRANSLATE_TIMEOUT_SECS: u64 = 10;

/// Get the application data directory
/// ~/Ayurakshak/ on all platforms, current directory when no home is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Default location of the conversation log database.
pub fn default_db_path() -> PathBuf {
    app_data_dir().join("conversations.db")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,ayurakshak_lib=debug"
}

/// Runtime settings for the helpdesk server, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub translate_url: String,
    pub translate_api_key: Option<String>,
    pub translate_timeout_secs: u64,
}

impl ServerConfig {
    /// Read `AYURAKSHAK_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("AYURAKSHAK_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "AYURAKSHAK_BIND",
                value: bind_raw.clone(),
            })?;

        let db_path = lookup("AYURAKSHAK_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let translate_url = lookup("AYURAKSHAK_TRANSLATE_URL")
            .unwrap_or_else(|| DEFAULT_TRANSLATE_URL.to_string());

        let translate_api_key = lookup("AYURAKSHAK_TRANSLATE_API_KEY").filter(|k| !k.is_empty());

        let translate_timeout_secs = match lookup("AYURAKSHAK_TRANSLATE_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: "AYURAKSHAK_TRANSLATE_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TRANSLATE_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            db_path,
            translate_url,
            translate_api_key,
            translate_timeout_secs,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}
