//! # Gemini Backend
//!
//! Single-attempt client for the `generateContent` endpoint.
//!
//! ## Request Shape
//! ```text
//! POST {base_url}/models/{model}:generateContent?key={api_key}
//! {
//!   "systemInstruction": { "parts": [{ "text": "..." }] },
//!   "contents": [
//!     { "role": "user",  "parts": [{ "text": "..." }] },
//!     { "role": "model", "parts": [{ "text": "..." }] },
//!     { "role": "user",  "parts": [{ "text": "<new message>" }] }
//!   ]
//! }
//! ```
//!
//! The reply is the text parts of the first candidate, concatenated.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assistant::ChatBackend;
use crate::config::AssistantConfig;
use crate::error::{AssistantError, AssistantResult};
use crate::types::{ChatRole, ChatTurn};

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl Content {
    fn text(role: Option<ChatRole>, text: &str) -> Self {
        Content {
            role: role.map(|r| r.as_str().to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

/// Builds the request body for one message on top of `history`.
pub(crate) fn build_request(
    system_instruction: &str,
    history: &[ChatTurn],
    message: &str,
) -> GenerateContentRequest {
    let mut contents: Vec<Content> = history
        .iter()
        .map(|turn| Content::text(Some(turn.role), &turn.text))
        .collect();
    contents.push(Content::text(Some(ChatRole::User), message));

    GenerateContentRequest {
        system_instruction: Content::text(None, system_instruction),
        contents,
    }
}

/// Extracts the reply text from a response body.
///
/// A candidate with no text parts yields an empty string.
pub(crate) fn reply_text(response: GenerateContentResponse) -> AssistantResult<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(AssistantError::EmptyResponse)?;

    Ok(candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

// =============================================================================
// Backend
// =============================================================================

/// [`ChatBackend`] for Google's Gemini API.
pub struct GeminiBackend {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    pub fn new(config: &AssistantConfig) -> AssistantResult<Self> {
        config.validate()?;

        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(GeminiBackend {
            client,
            api_key: config.api_key().map(str::to_string),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ChatBackend for GeminiBackend {
    async fn generate(
        &self,
        system_instruction: &str,
        history: &[ChatTurn],
        message: &str,
    ) -> AssistantResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AssistantError::MissingApiKey)?;

        let body = build_request(system_instruction, history, message);
        debug!(model = %self.model, turns = body.contents.len(), "POST generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        reply_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{ConversationalAssistant, TravelAssistant, APOLOGY_REPLY};

    #[test]
    fn test_request_shape() {
        let history = vec![ChatTurn::model("您好！"), ChatTurn::user("Xi'an?")];
        let body = build_request("be helpful", &history, "How much for two?");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be helpful");
        assert!(json["systemInstruction"].get("role").is_none());

        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "model");
        assert_eq!(contents[1]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "How much for two?");
    }

    #[test]
    fn test_reply_concatenates_first_candidate_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"role":"model","parts":[{"text":"Hello, "},{"text":"traveller"}]}},
                {"content":{"role":"model","parts":[{"text":"ignored"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(reply_text(response).unwrap(), "Hello, traveller");
    }

    #[test]
    fn test_reply_without_candidates_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(reply_text(response), Err(AssistantError::EmptyResponse)));
    }

    #[test]
    fn test_candidate_without_text_is_empty() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(reply_text(response).unwrap(), "");
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let config = AssistantConfig {
            base_url: "http://localhost:9000/v1beta/".to_string(),
            ..AssistantConfig::default()
        };
        let backend = GeminiBackend::new(&config).unwrap();
        assert_eq!(
            backend.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let backend = GeminiBackend::new(&AssistantConfig::default()).unwrap();
        let err = backend.generate("sys", &[], "hi").await.unwrap_err();
        assert!(matches!(err, AssistantError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let config = AssistantConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            ..AssistantConfig::default()
        };
        let backend = GeminiBackend::new(&config).unwrap();

        let err = backend.generate("sys", &[], "hi").await.unwrap_err();
        assert_eq!(err.code(), "HTTP_ERROR");
    }

    #[tokio::test]
    async fn test_unreachable_host_gets_apology() {
        let config = AssistantConfig {
            api_key: Some("test-key".to_string()),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            ..AssistantConfig::default()
        };
        let assistant =
            TravelAssistant::with_instruction(GeminiBackend::new(&config).unwrap(), "sys");

        let reply = assistant.send_message(&[], "Any tours in Guilin?").await;
        assert_eq!(reply, APOLOGY_REPLY);
    }
}
