//! Configuration parsing for the breed inquiry service
//!
//! This crate handles parsing of YAML configuration files, environment
//! variable substitution, and validation.

pub mod env;
pub mod validator;
pub mod yaml;

pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use breed_inquiry_core::{AppConfig, BreedInquiryError};
use std::path::Path;

/// Parse a configuration file from a path
pub fn parse_file(path: impl AsRef<Path>) -> Result<AppConfig, BreedInquiryError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        BreedInquiryError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_string(&content)
}

/// Parse a configuration from a string
pub fn parse_string(content: &str) -> Result<AppConfig, BreedInquiryError> {
    let config = YamlParser::parse(content)?;

    ConfigValidator::new().validate(&config)?;

    Ok(config)
}
