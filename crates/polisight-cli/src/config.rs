//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use polisight_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration, stored as TOML under the user's home directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Root directory for product documents and extraction results
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Default model deployment name
    #[serde(default = "default_model")]
    pub model: String,

    /// Azure OpenAI connection settings
    #[serde(default)]
    pub azure: AzureSettings,

    /// Extraction pipeline tuning
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Azure OpenAI connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureSettings {
    /// Resource endpoint, e.g. https://example.openai.azure.com
    #[serde(default)]
    pub endpoint: String,

    /// API key; prefer the AZURE_OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: String,

    /// API version query parameter
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".polisight").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            config.extractor.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            model: default_model(),
            azure: AzureSettings::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Default for AzureSettings {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            api_version: default_api_version(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".polisight")
        .join("data")
}

fn default_model() -> String {
    "o4-mini".to_string()
}

fn default_api_version() -> String {
    polisight_llm::azure::DEFAULT_API_VERSION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "o4-mini");
        assert!(config.azure.endpoint.is_empty());
        assert_eq!(config.extractor.max_context_chars, 280_000);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.azure.endpoint = "https://example.openai.azure.com".to_string();
        config.model = "gpt-4o".to_string();

        let contents = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.model, "gpt-4o");
        assert_eq!(parsed.azure.endpoint, config.azure.endpoint);
        assert_eq!(parsed.extractor.max_retries, 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: Config = toml::from_str(r#"model = "gpt-4o""#).unwrap();
        assert_eq!(parsed.model, "gpt-4o");
        assert_eq!(parsed.azure.api_version, default_api_version());
        assert_eq!(parsed.extractor.retry_delay_secs, 5);
    }
}
