//! Configuration for the extraction pipeline

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Character budget for aggregated document text sent to the LLM
    pub max_context_chars: usize,

    /// Attempts per structured LLM call before giving up
    pub max_retries: u32,

    /// Fixed delay between retry attempts (seconds, not exponential)
    pub retry_delay_secs: u64,

    /// Completion token budget for extraction and review calls
    pub max_answer_tokens: u32,
}

impl ExtractorConfig {
    /// Get the retry delay as a Duration
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_context_chars == 0 {
            return Err(ExtractorError::Config(
                "max_context_chars must be greater than 0".to_string(),
            ));
        }
        if self.max_retries == 0 {
            return Err(ExtractorError::Config(
                "max_retries must be greater than 0".to_string(),
            ));
        }
        if self.max_answer_tokens == 0 {
            return Err(ExtractorError::Config(
                "max_answer_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_context_chars: 280_000,
            max_retries: 3,
            retry_delay_secs: 5,
            max_answer_tokens: 32_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_context_chars, 280_000);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_configs() {
        let mut config = ExtractorConfig::default();
        config.max_context_chars = 0;
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));

        let mut config = ExtractorConfig::default();
        config.max_retries = 0;
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));

        let mut config = ExtractorConfig::default();
        config.max_answer_tokens = 0;
        assert!(matches!(config.validate(), Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_from_toml_rejects_invalid_values() {
        let toml_str = "max_context_chars = 0\n\
                        max_retries = 3\n\
                        retry_delay_secs = 5\n\
                        max_answer_tokens = 32000\n";
        assert!(matches!(
            ExtractorConfig::from_toml(toml_str),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_context_chars, parsed.max_context_chars);
        assert_eq!(config.max_retries, parsed.max_retries);
        assert_eq!(config.retry_delay_secs, parsed.retry_delay_secs);
        assert_eq!(config.max_answer_tokens, parsed.max_answer_tokens);
    }
}
