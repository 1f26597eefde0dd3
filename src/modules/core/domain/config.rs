//! Service configuration model

use breed_inquiry_types::Connector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration of the breed inquiry service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Service name, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Storage connection settings
    pub database: DatabaseConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_name() -> String {
    "breed-inquiry".to_string()
}

impl AppConfig {
    /// Create a configuration with defaults for everything but the database URL
    pub fn new(connector: Connector, url: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            database: DatabaseConfig::new(connector, url),
            server: ServerConfig::default(),
        }
    }

    /// Get the server port, defaulting to 3000
    pub fn port(&self) -> u16 {
        self.server.port()
    }
}

/// Storage connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQL connector type (default: mysql)
    #[serde(default)]
    pub connector: Connector,

    /// Connection URL (supports environment variable substitution)
    pub url: String,

    /// Startup connect and ping deadline in seconds (default: 5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Per-request query deadline in seconds (default: 3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_timeout_secs: Option<u64>,

    /// Connection pool configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolConfig>,
}

impl DatabaseConfig {
    pub fn new(connector: Connector, url: impl Into<String>) -> Self {
        Self {
            connector,
            url: url.into(),
            connect_timeout_secs: None,
            query_timeout_secs: None,
            pool: None,
        }
    }

    /// Get connect timeout with default fallback
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.unwrap_or(5))
    }

    /// Get query timeout with default fallback
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs.unwrap_or(3))
    }

    /// Get pool settings, falling back to defaults
    pub fn pool(&self) -> PoolConfig {
        self.pool.clone().unwrap_or_default()
    }
}

/// Connection pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of open connections (default: 100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_open: Option<u32>,

    /// Idle connections kept warm (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_idle: Option<u32>,

    /// Maximum lifetime of a connection in seconds (default: 600)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lifetime_secs: Option<u64>,

    /// Idle time after which connections above `max_idle` are closed (default: 600)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout_secs: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_open: Some(100),
            max_idle: Some(10),
            max_lifetime_secs: Some(600),
            idle_timeout_secs: Some(600),
        }
    }
}

impl PoolConfig {
    /// Get max open connections with default fallback
    pub fn max_open(&self) -> u32 {
        self.max_open.unwrap_or(100)
    }

    /// Get idle floor with default fallback
    pub fn max_idle(&self) -> u32 {
        self.max_idle.unwrap_or(10)
    }

    /// Get max lifetime with default fallback
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs.unwrap_or(600))
    }

    /// Get idle timeout with default fallback
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs.unwrap_or(600))
    }
}

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: 0.0.0.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Port to listen on (default: 3000)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Whole-request timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Cross-origin policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<CorsConfig>,
}

impl ServerConfig {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or("0.0.0.0")
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(3000)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(30))
    }

    pub fn cors(&self) -> CorsConfig {
        self.cors.clone().unwrap_or_default()
    }
}

/// Cross-origin policy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows every origin (default: `["*"]`)
    #[serde(default = "default_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_origins(),
        }
    }
}

impl CorsConfig {
    /// True when any origin is allowed
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}
