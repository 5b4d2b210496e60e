//! # Assistant Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Assistant Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Upstream            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  MissingApiKey  │  │  Http           │  │  Upstream {status}      │ │
//! │  │  InvalidConfig  │  │                 │  │  EmptyResponse          │ │
//! │  │  ConfigLoad     │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  None of these reach the chat widget: TravelAssistant logs them and    │
//! │  answers with a fixed message instead.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for assistant operations.
pub type AssistantResult<T> = Result<T, AssistantError>;

#[derive(Debug, Error)]
pub enum AssistantError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// No API key configured for the hosted model.
    #[error("Assistant API key is not configured")]
    MissingApiKey,

    #[error("Invalid assistant configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load assistant config: {0}")]
    ConfigLoad(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // =========================================================================
    // Upstream Errors
    // =========================================================================
    /// The model API answered with a non-success status.
    #[error("Model API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The model API answered without any candidate.
    #[error("Model API returned no candidates")]
    EmptyResponse,
}

impl From<std::io::Error> for AssistantError {
    fn from(err: std::io::Error) -> Self {
        AssistantError::ConfigLoad(err.to_string())
    }
}

impl From<toml::de::Error> for AssistantError {
    fn from(err: toml::de::Error) -> Self {
        AssistantError::ConfigLoad(err.to_string())
    }
}

impl AssistantError {
    /// Machine-readable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            AssistantError::MissingApiKey => "MISSING_API_KEY",
            AssistantError::InvalidConfig(_) => "INVALID_CONFIG",
            AssistantError::ConfigLoad(_) => "CONFIG_LOAD_ERROR",
            AssistantError::Http(_) => "HTTP_ERROR",
            AssistantError::Upstream { .. } => "UPSTREAM_ERROR",
            AssistantError::EmptyResponse => "EMPTY_RESPONSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AssistantError::MissingApiKey.code(), "MISSING_API_KEY");
        assert_eq!(
            AssistantError::Upstream {
                status: 503,
                body: String::new()
            }
            .code(),
            "UPSTREAM_ERROR"
        );
    }

    #[test]
    fn test_toml_error_becomes_config_load() {
        let err: AssistantError = toml::from_str::<toml::Value>("not = [valid")
            .unwrap_err()
            .into();
        assert!(matches!(err, AssistantError::ConfigLoad(_)));
    }
}
