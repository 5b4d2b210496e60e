//! # voyage-assistant: Conversational Travel Assistant
//!
//! Answers visitor questions about the catalog through a hosted model.
//!
//! ## Usage
//! ```rust,ignore
//! let config = AssistantConfig::load_or_default(None);
//! let backend = GeminiBackend::new(&config)?;
//! let assistant = TravelAssistant::new(backend, &StaticCatalog::seeded(), Locale::Zh);
//!
//! let reply = assistant.send_message(&history, "两个人去西安多少钱？").await;
//! ```
//!
//! ## Failure Policy
//! `send_message` always returns text. A missing API key yields
//! [`MISSING_API_KEY_REPLY`]; every other failure is logged and yields
//! [`APOLOGY_REPLY`]. There is no retry.

pub mod assistant;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;
pub mod types;

pub use assistant::{
    ChatBackend, ConversationalAssistant, TravelAssistant, APOLOGY_REPLY, MISSING_API_KEY_REPLY,
};
pub use config::AssistantConfig;
pub use error::{AssistantError, AssistantResult};
pub use gemini::GeminiBackend;
pub use types::{ChatRole, ChatTurn};
