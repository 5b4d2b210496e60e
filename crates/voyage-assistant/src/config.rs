//! # Assistant Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VOYAGE_ASSISTANT_API_KEY (or GEMINI_API_KEY)                       │
//! │     VOYAGE_ASSISTANT_MODEL, VOYAGE_ASSISTANT_BASE_URL                  │
//! │     VOYAGE_ASSISTANT_TIMEOUT_SECS                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/voyage/assistant.toml (Linux)                            │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     gemini-2.5-flash, no API key                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # assistant.toml
//! api_key = "..."
//! model = "gemini-2.5-flash"
//! base_url = "https://generativelanguage.googleapis.com/v1beta"
//! timeout_secs = 30
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AssistantError, AssistantResult};

/// Settings for the hosted model backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// API key for the model endpoint. Without it every message gets the
    /// "key is missing" reply.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without a trailing `/models`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for AssistantConfig {
    fn default() -> Self {
        AssistantConfig {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl AssistantConfig {
    /// Loads configuration from file and environment.
    pub fn load(config_path: Option<PathBuf>) -> AssistantResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading assistant config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Assistant config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load assistant config: {}. Using defaults.", e);
            let mut config = Self::default();
            config.apply_env_overrides();
            config
        })
    }

    pub fn validate(&self) -> AssistantResult<()> {
        if self.model.trim().is_empty() {
            return Err(AssistantError::InvalidConfig(
                "model must not be empty".into(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AssistantError::InvalidConfig(format!(
                "base_url must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AssistantError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from a variable lookup.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("VOYAGE_ASSISTANT_API_KEY").or_else(|| lookup("GEMINI_API_KEY")) {
            debug!("Overriding assistant API key from environment");
            self.api_key = Some(key);
        }

        if let Some(model) = lookup("VOYAGE_ASSISTANT_MODEL") {
            debug!(model = %model, "Overriding assistant model from environment");
            self.model = model;
        }

        if let Some(url) = lookup("VOYAGE_ASSISTANT_BASE_URL") {
            debug!(url = %url, "Overriding assistant base URL from environment");
            self.base_url = url;
        }

        if let Some(timeout) = lookup("VOYAGE_ASSISTANT_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid VOYAGE_ASSISTANT_TIMEOUT_SECS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "voyage", "voyage")
            .map(|dirs| dirs.config_dir().join("assistant.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_key().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AssistantConfig::default();

        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.timeout_secs = 5;
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = AssistantConfig {
            api_key: Some("   ".to_string()),
            ..AssistantConfig::default()
        };
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AssistantConfig::default();
        config.apply_overrides(lookup_from(&[
            ("VOYAGE_ASSISTANT_API_KEY", "primary"),
            ("GEMINI_API_KEY", "fallback"),
            ("VOYAGE_ASSISTANT_MODEL", "gemini-2.0-pro"),
            ("VOYAGE_ASSISTANT_TIMEOUT_SECS", "12"),
        ]));

        assert_eq!(config.api_key(), Some("primary"));
        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_gemini_key_is_a_fallback() {
        let mut config = AssistantConfig::default();
        config.apply_overrides(lookup_from(&[("GEMINI_API_KEY", "fallback")]));
        assert_eq!(config.api_key(), Some("fallback"));
    }

    #[test]
    fn test_invalid_timeout_is_ignored() {
        let mut config = AssistantConfig::default();
        config.apply_overrides(lookup_from(&[("VOYAGE_ASSISTANT_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let config: AssistantConfig = toml::from_str("api_key = \"abc\"").unwrap();
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("voyage-assistant-does-not-exist.toml");
        let config = AssistantConfig::load_or_default(Some(path));
        assert!(!config.model.is_empty());
    }
}
