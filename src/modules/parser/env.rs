//! Environment variable substitution

use breed_inquiry_core::BreedInquiryError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid env pattern")
});

/// Environment variable substitutor
pub struct EnvSubstitutor {
    /// Whether to fail on missing environment variables
    strict: bool,
}

impl EnvSubstitutor {
    /// Create a new substitutor with strict mode (fails on missing vars)
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Create a new substitutor with lenient mode (leaves placeholders for missing vars)
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute environment variables in the given content
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn substitute(&self, content: &str) -> Result<String, BreedInquiryError> {
        let _ = dotenvy::dotenv();
        self.substitute_with(content, |name| std::env::var(name).ok())
    }

    /// Substitute placeholders using `lookup` to resolve variable names
    pub fn substitute_with<F>(&self, content: &str, lookup: F) -> Result<String, BreedInquiryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();

        let result = ENV_PATTERN.replace_all(content, |cap: &Captures<'_>| {
            let name = &cap[1];
            match lookup(name) {
                Some(value) => value,
                None => {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    cap[0].to_string()
                }
            }
        });

        if self.strict && !missing.is_empty() {
            return Err(BreedInquiryError::EnvVarNotFound(missing.join(", ")));
        }

        Ok(result.into_owned())
    }

    /// Check if a string contains environment variable placeholders
    pub fn has_placeholders(content: &str) -> bool {
        ENV_PATTERN.is_match(content)
    }

    /// Extract all environment variable names from a string
    pub fn extract_var_names(content: &str) -> Vec<String> {
        ENV_PATTERN
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect()
    }
}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::new()
    }
}
