//! Configuration validation

use breed_inquiry_core::{AppConfig, BreedInquiryError, CorsConfig, DatabaseConfig, ServerConfig};
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for valid service names (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").expect("valid name pattern")
});

/// Regex pattern for a CORS origin: scheme, host and optional port, no path
static ORIGIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9.-]+(?::[0-9]{1,5})?$").expect("valid origin pattern")
});

/// Configuration validator
pub struct ConfigValidator {
    /// Whether to validate names strictly
    strict_names: bool,
}

impl ConfigValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_names: true }
    }

    /// Create a validator with lenient name checking
    pub fn lenient() -> Self {
        Self {
            strict_names: false,
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self, config: &AppConfig) -> Result<(), BreedInquiryError> {
        self.validate_name(&config.name)?;
        self.validate_database(&config.database)?;
        self.validate_server(&config.server)?;
        self.validate_deadlines(&config.database, &config.server)?;
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), BreedInquiryError> {
        if name.is_empty() {
            return Err(BreedInquiryError::Validation(
                "Service name cannot be empty".to_string(),
            ));
        }

        if self.strict_names && !NAME_PATTERN.is_match(name) {
            return Err(BreedInquiryError::Validation(format!(
                "Invalid service name '{}': must be lower-kebab-case or lower_snake_case",
                name
            )));
        }

        Ok(())
    }

    fn validate_database(&self, database: &DatabaseConfig) -> Result<(), BreedInquiryError> {
        if database.url.trim().is_empty() {
            return Err(BreedInquiryError::Validation(
                "Database URL cannot be empty".to_string(),
            ));
        }

        let schemes = database.connector.url_schemes();
        if !schemes.iter().any(|scheme| database.url.starts_with(scheme)) {
            return Err(BreedInquiryError::Validation(format!(
                "Database URL does not match connector '{}': expected one of {}",
                database.connector,
                schemes.join(", ")
            )));
        }

        if database.connect_timeout_secs == Some(0) {
            return Err(BreedInquiryError::Validation(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if database.query_timeout_secs == Some(0) {
            return Err(BreedInquiryError::Validation(
                "query_timeout_secs must be greater than 0".to_string(),
            ));
        }

        let pool = database.pool();
        if pool.max_open() == 0 {
            return Err(BreedInquiryError::Validation(
                "pool.max_open must be greater than 0".to_string(),
            ));
        }

        if pool.max_idle() > pool.max_open() {
            return Err(BreedInquiryError::Validation(format!(
                "pool.max_idle ({}) cannot exceed pool.max_open ({})",
                pool.max_idle(),
                pool.max_open()
            )));
        }

        if pool.max_lifetime_secs == Some(0) || pool.idle_timeout_secs == Some(0) {
            return Err(BreedInquiryError::Validation(
                "pool lifetimes must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_server(&self, server: &ServerConfig) -> Result<(), BreedInquiryError> {
        if server.port == Some(0) {
            return Err(BreedInquiryError::Validation(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if server.request_timeout_secs == Some(0) {
            return Err(BreedInquiryError::Validation(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        self.validate_cors(&server.cors())
    }

    /// The request deadline must outlast the query deadline so a slow query
    /// is reported by the executor, not cut off by the transport.
    fn validate_deadlines(
        &self,
        database: &DatabaseConfig,
        server: &ServerConfig,
    ) -> Result<(), BreedInquiryError> {
        let query = database.query_timeout();
        let request = server.request_timeout();

        if request <= query {
            return Err(BreedInquiryError::Validation(format!(
                "request_timeout_secs ({}) must be greater than query_timeout_secs ({})",
                request.as_secs(),
                query.as_secs()
            )));
        }

        Ok(())
    }

    fn validate_cors(&self, cors: &CorsConfig) -> Result<(), BreedInquiryError> {
        if cors.allowed_origins.is_empty() {
            return Err(BreedInquiryError::Validation(
                "cors.allowed_origins cannot be empty".to_string(),
            ));
        }

        for origin in &cors.allowed_origins {
            if origin != "*" && !ORIGIN_PATTERN.is_match(origin) {
                return Err(BreedInquiryError::Validation(format!(
                    "Invalid CORS origin '{}': expected '*' or an http(s) origin",
                    origin
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
