//! # Chat Session
//!
//! Transcript behind the floating chat widget.

use tracing::debug;
use voyage_assistant::{ChatTurn, ConversationalAssistant};

/// First line of every conversation.
pub const GREETING: &str = "您好！我是您的智能旅行顾问。我可以帮您寻找合适的研学项目、计算拼团优惠或解答行程疑问。请问有什么可以帮您？";

/// Shown when the assistant answers with nothing.
pub const CANNOT_ANSWER: &str = "抱歉，我暂时无法回答。";

pub struct ChatSession<A: ConversationalAssistant> {
    assistant: A,
    messages: Vec<ChatTurn>,
}

impl<A: ConversationalAssistant> ChatSession<A> {
    pub fn new(assistant: A) -> Self {
        ChatSession {
            assistant,
            messages: vec![ChatTurn::model(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatTurn] {
        &self.messages
    }

    /// Sends `text` and appends both sides of the exchange.
    ///
    /// Blank input is ignored and returns `None`. Otherwise returns the
    /// model's reply turn.
    pub async fn send(&mut self, text: &str) -> Option<&ChatTurn> {
        if text.trim().is_empty() {
            return None;
        }

        let history_len = self.messages.len();
        self.messages.push(ChatTurn::user(text));

        let reply = self
            .assistant
            .send_message(&self.messages[..history_len], text)
            .await;

        let reply = if reply.trim().is_empty() {
            debug!("Assistant returned an empty reply");
            CANNOT_ANSWER.to_string()
        } else {
            reply
        };

        self.messages.push(ChatTurn::model(reply));
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use voyage_assistant::ChatRole;

    /// Echoes the history length so tests can see what was passed.
    struct CountingAssistant {
        reply: &'static str,
        seen: Mutex<Vec<usize>>,
    }

    impl CountingAssistant {
        fn replying(reply: &'static str) -> Self {
            CountingAssistant {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ConversationalAssistant for CountingAssistant {
        async fn send_message(&self, history: &[ChatTurn], _message: &str) -> String {
            self.seen.lock().unwrap().push(history.len());
            self.reply.to_string()
        }
    }

    #[test]
    fn test_starts_with_greeting() {
        let chat = ChatSession::new(CountingAssistant::replying("hi"));
        assert_eq!(chat.messages(), &[ChatTurn::model(GREETING)]);
    }

    #[tokio::test]
    async fn test_send_appends_both_turns() {
        let mut chat = ChatSession::new(CountingAssistant::replying("Try Xi'an."));

        let reply = chat.send("History tours?").await.cloned();

        assert_eq!(reply, Some(ChatTurn::model("Try Xi'an.")));
        assert_eq!(chat.messages().len(), 3);
        assert_eq!(chat.messages()[1].role, ChatRole::User);
        // history excludes the message being sent
        assert_eq!(*chat.assistant.seen.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut chat = ChatSession::new(CountingAssistant::replying("unused"));
        assert!(chat.send("   ").await.is_none());
        assert_eq!(chat.messages().len(), 1);
        assert!(chat.assistant.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_reply_is_replaced() {
        let mut chat = ChatSession::new(CountingAssistant::replying(""));
        let reply = chat.send("?").await.cloned().unwrap();
        assert_eq!(reply.text, CANNOT_ANSWER);
    }
}
