//! Turning visitor input and model results into chat messages.

use crate::error::Result;

/// Shown in place of the reply when the model cannot be reached.
pub const APOLOGY: &str = "I'm having trouble connecting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl Author {
    /// Class list of the rendered message element.
    pub fn css_classes(self) -> [&'static str; 2] {
        match self {
            Self::User => ["message", "user-msg"],
            Self::Bot => ["message", "bot-msg"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            author: Author::Bot,
            text: text.into(),
        }
    }
}

/// Trimmed input, or `None` when there is nothing to send.
pub fn prepare_input(raw: &str) -> Option<&str> {
    let text = raw.trim();
    (!text.is_empty()).then_some(text)
}

/// The bot message for a model result. Faults are logged and replaced by
/// [`APOLOGY`].
pub fn reply_or_apology(result: Result<String>) -> ChatMessage {
    match result {
        Ok(reply) => ChatMessage::bot(reply),
        Err(err) => {
            tracing::error!("chat relay failed: {err}");
            ChatMessage::bot(APOLOGY)
        }
    }
}
