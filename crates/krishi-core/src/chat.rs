//! Chat conversation state shared by every front-end.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{KrishiError, Result};
use crate::i18n::labels;
use crate::language::Language;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A chat message in the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

const WELCOME_ID: &str = "1";

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    typing: bool,
    next_id: u64,
}

impl ChatSession {
    /// Opens with the welcome message in `lang`.
    pub fn new(lang: Language) -> Self {
        let welcome = ChatMessage {
            id: WELCOME_ID.to_string(),
            text: labels(lang).welcome_message.to_string(),
            sender: Sender::Bot,
            timestamp: Local::now(),
        };
        Self {
            messages: vec![welcome],
            typing: false,
            next_id: 2,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Re-translate the welcome message while the conversation has not started.
    pub fn set_language(&mut self, lang: Language) {
        if let [only] = self.messages.as_mut_slice() {
            if only.id == WELCOME_ID {
                only.text = labels(lang).welcome_message.to_string();
            }
        }
    }

    /// Append the user's message. Returns the text to hand to the assistant, or
    /// `None` when the input is blank.
    pub fn submit(&mut self, input: &str) -> Result<Option<String>> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        if self.typing {
            warn!("chat message submitted while a reply is pending");
            return Err(KrishiError::ReplyPending);
        }

        let message = self.push(input.to_string(), Sender::User);
        info!(id = %message, "chat message submitted");
        self.typing = true;
        Ok(Some(input.to_string()))
    }

    /// Append the bot's reply and stop the typing indicator.
    pub fn receive(&mut self, reply: String) {
        self.push(reply, Sender::Bot);
        self.typing = false;
    }

    fn push(&mut self, text: String, sender: Sender) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: id.clone(),
            text,
            sender,
            timestamp: Local::now(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::assistant::Assistant;

    #[test]
    fn test_starts_with_welcome_in_language() {
        let session = ChatSession::new(Language::Ta);
        assert_eq!(session.messages().len(), 1);
        let welcome = &session.messages()[0];
        assert_eq!(welcome.id, "1");
        assert_eq!(welcome.sender, Sender::Bot);
        assert!(welcome.text.starts_with("வணக்கம்"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new(Language::En);
        assert_eq!(session.submit("   ").unwrap(), None);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_typing());
    }

    #[test]
    fn test_second_submit_while_typing_is_rejected() {
        let mut session = ChatSession::new(Language::En);
        session.submit("wheat").unwrap();
        assert!(matches!(session.submit("rice"), Err(KrishiError::ReplyPending)));
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn test_language_switch_only_before_conversation() {
        let mut session = ChatSession::new(Language::En);
        session.set_language(Language::Hi);
        assert!(session.messages()[0].text.starts_with("नमस्ते"));

        session.submit("hi").unwrap();
        session.set_language(Language::En);
        assert!(session.messages()[0].text.starts_with("नमस्ते"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_user_entry_then_bot_entry_after_delay() {
        let mut session = ChatSession::new(Language::En);
        let assistant = Assistant::new(Duration::from_millis(1500));

        let text = session.submit("What is the rice MSP?").unwrap().unwrap();
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].sender, Sender::User);
        assert!(session.is_typing());

        let reply = assistant.reply(&text, Language::En).await;
        session.receive(reply);

        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Bot);
        assert!(last.text.contains("₹2,300"));
        assert!(!session.is_typing());
        let ids: Vec<&str> = session.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
