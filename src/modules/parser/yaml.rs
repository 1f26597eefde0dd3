//! YAML configuration parser

use breed_inquiry_core::{AppConfig, BreedInquiryError};
use tracing::debug;

use crate::env::EnvSubstitutor;

/// YAML parser for service configuration files
pub struct YamlParser;

impl YamlParser {
    /// Parse a YAML string into an AppConfig
    ///
    /// `{{ env.NAME }}` placeholders are substituted before parsing.
    pub fn parse(content: &str) -> Result<AppConfig, BreedInquiryError> {
        let vars = EnvSubstitutor::extract_var_names(content);
        if !vars.is_empty() {
            debug!("Substituting environment variables: {}", vars.join(", "));
        }

        let substituted = EnvSubstitutor::new().substitute(content)?;
        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<AppConfig, BreedInquiryError> {
        serde_yaml::from_str::<AppConfig>(content)
            .map_err(|e| BreedInquiryError::Config(format!("YAML parse error: {}", e)))
    }
}
