//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `washboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use washboard_adapter_notify::AuthorizationPolicy;
use washboard_domain::error::ValidationError;
use washboard_domain::sort::{LegacySortKey, SortMode, SortRegime};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Board clock settings.
    pub scheduler: SchedulerConfig,
    /// Sort regime selection.
    pub sort: SortConfig,
    /// Notification settings.
    pub notifications: NotificationsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Board clock configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Seconds between ticks of the transition engine.
    pub tick_seconds: u64,
}

/// Sort regime configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// `"modern"` or `"legacy"`.
    pub regime: String,
}

/// Notification configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// `"grant"` or `"deny"` — how the session authorization prompt resolves.
    pub authorize: String,
}

impl Config {
    /// Load configuration from `washboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or a value
    /// fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("washboard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WASHBOARD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("WASHBOARD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("WASHBOARD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("WASHBOARD_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("WASHBOARD_TICK_SECONDS") {
            if let Ok(seconds) = val.parse() {
                self.scheduler.tick_seconds = seconds;
            }
        }
        if let Ok(val) = std::env::var("WASHBOARD_SORT_REGIME") {
            self.sort.regime = val;
        }
        if let Ok(val) = std::env::var("WASHBOARD_NOTIFY") {
            self.notifications.authorize = val;
        }
        if let Ok(val) = std::env::var("WASHBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.scheduler.tick_seconds == 0 {
            return Err(ConfigError::Validation(
                "scheduler.tick_seconds must be non-zero".to_string(),
            ));
        }
        if !matches!(self.sort.regime.as_str(), "modern" | "legacy") {
            return Err(ValidationError::UnknownValue {
                field: "sort.regime",
                value: self.sort.regime.clone(),
            }
            .into());
        }
        if !matches!(self.notifications.authorize.as_str(), "grant" | "deny") {
            return Err(ValidationError::UnknownValue {
                field: "notifications.authorize",
                value: self.notifications.authorize.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// The configured sort regime, at its first stop on the cycle.
    #[must_use]
    pub fn sort_regime(&self) -> SortRegime {
        // validate() has already constrained the value.
        if self.sort.regime == "legacy" {
            SortRegime::Legacy(LegacySortKey::Hall)
        } else {
            SortRegime::Modern(SortMode::Name)
        }
    }

    /// How the notifier answers the session authorization prompt.
    #[must_use]
    pub fn authorization_policy(&self) -> AuthorizationPolicy {
        if self.notifications.authorize == "deny" {
            AuthorizationPolicy::Deny
        } else {
            AuthorizationPolicy::Grant
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:washboard.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "washboardd=info,washboard=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { tick_seconds: 1 }
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            regime: "modern".to_string(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            authorize: "grant".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// A setting value matched no known variant.
    #[error("invalid configuration: {0}")]
    UnknownValue(#[from] ValidationError),
}
