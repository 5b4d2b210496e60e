//! # Assistant Seams
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  ConversationalAssistant     │  infallible: always returns a reply
//! │  (what the chat widget uses) │
//! └──────────────┬───────────────┘
//!                │ impl
//! ┌──────────────▼───────────────┐
//! │  TravelAssistant<B>          │  owns the system instruction,
//! │                              │  maps every error to a fixed reply
//! └──────────────┬───────────────┘
//!                │ B: ChatBackend
//! ┌──────────────▼───────────────┐
//! │  GeminiBackend / test mocks  │  fallible, single attempt
//! └──────────────────────────────┘
//! ```

use async_trait::async_trait;
use tracing::{debug, error, warn};
use voyage_core::catalog::CatalogProvider;
use voyage_core::Locale;

use crate::error::{AssistantError, AssistantResult};
use crate::prompt::build_system_instruction;
use crate::types::ChatTurn;

/// Reply when no API key is configured.
pub const MISSING_API_KEY_REPLY: &str = "API Key is missing. Please configure the environment.";

/// Reply for any transport or upstream failure.
pub const APOLOGY_REPLY: &str =
    "I'm having trouble connecting to the travel database right now. Please try again in a moment.";

/// A hosted model that can continue a conversation.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> AssistantResult<String>;
}

/// The assistant as the chat widget sees it. Never fails.
#[async_trait]
pub trait ConversationalAssistant: Send + Sync {
    /// Replies to `message` given the earlier `history` (oldest first).
    async fn send_message(&self, history: &[ChatTurn], message: &str) -> String;
}

/// Travel consultant persona over a [`ChatBackend`].
pub struct TravelAssistant<B: ChatBackend> {
    backend: B,
    system_instruction: String,
}

impl<B: ChatBackend> TravelAssistant<B> {
    /// Builds the assistant with a catalog snapshot taken now.
    pub fn new(backend: B, catalog: &dyn CatalogProvider, locale: Locale) -> Self {
        let system_instruction = build_system_instruction(catalog, locale);
        debug!(len = system_instruction.len(), "Built assistant system instruction");
        TravelAssistant {
            backend,
            system_instruction,
        }
    }

    pub fn with_instruction(backend: B, system_instruction: impl Into<String>) -> Self {
        TravelAssistant {
            backend,
            system_instruction: system_instruction.into(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }
}

#[async_trait]
impl<B: ChatBackend> ConversationalAssistant for TravelAssistant<B> {
    async fn send_message(&self, history: &[ChatTurn], message: &str) -> String {
        match self
            .backend
            .generate(&self.system_instruction, history, message)
            .await
        {
            Ok(reply) => reply,
            Err(AssistantError::MissingApiKey) => {
                warn!("Assistant called without an API key");
                MISSING_API_KEY_REPLY.to_string()
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "Assistant request failed");
                APOLOGY_REPLY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use voyage_core::StaticCatalog;

    /// Records calls and replays a fixed outcome.
    struct ScriptedBackend {
        outcome: fn() -> AssistantResult<String>,
        calls: Mutex<Vec<(usize, String)>>,
    }

    impl ScriptedBackend {
        fn new(outcome: fn() -> AssistantResult<String>) -> Self {
            ScriptedBackend {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ChatBackend for ScriptedBackend {
        async fn generate(
            &self,
            _system_instruction: &str,
            history: &[ChatTurn],
            message: &str,
        ) -> AssistantResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push((history.len(), message.to_string()));
            (self.outcome)()
        }
    }

    #[tokio::test]
    async fn test_reply_passes_through() {
        let assistant = TravelAssistant::with_instruction(
            ScriptedBackend::new(|| Ok("Try the Guilin tour.".to_string())),
            "sys",
        );
        let history = vec![ChatTurn::model("您好")];
        let reply = assistant.send_message(&history, "Nature please").await;

        assert_eq!(reply, "Try the Guilin tour.");
        let calls = assistant.backend.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(1, "Nature please".to_string())]);
    }

    #[tokio::test]
    async fn test_missing_key_reply() {
        let assistant = TravelAssistant::with_instruction(
            ScriptedBackend::new(|| Err(AssistantError::MissingApiKey)),
            "sys",
        );
        assert_eq!(assistant.send_message(&[], "hi").await, MISSING_API_KEY_REPLY);
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_apology() {
        let assistant = TravelAssistant::with_instruction(
            ScriptedBackend::new(|| {
                Err(AssistantError::Upstream {
                    status: 500,
                    body: "boom".to_string(),
                })
            }),
            "sys",
        );
        assert_eq!(assistant.send_message(&[], "hi").await, APOLOGY_REPLY);
    }

    #[tokio::test]
    async fn test_empty_response_becomes_apology() {
        let assistant = TravelAssistant::with_instruction(
            ScriptedBackend::new(|| Err(AssistantError::EmptyResponse)),
            "sys",
        );
        assert_eq!(assistant.send_message(&[], "hi").await, APOLOGY_REPLY);
    }

    #[test]
    fn test_new_embeds_catalog() {
        let assistant = TravelAssistant::new(
            ScriptedBackend::new(|| Ok(String::new())),
            &StaticCatalog::seeded(),
            Locale::En,
        );
        assert!(assistant.system_instruction().contains("8/20 booked"));
    }
}
