//! Conversation history for one page view.

use super::persona::Persona;
use super::wire::{Content, GenerateContentRequest, Role};

/// Model id, system instruction and the turns exchanged so far.
#[derive(Debug, Clone)]
pub struct ChatSession {
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(model: impl Into<String>, persona: &Persona) -> Self {
        Self {
            model: model.into(),
            system_instruction: persona.system_instruction(),
            history: Vec::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Request for `text` on top of the recorded history.
    pub fn request_for(&self, text: &str) -> GenerateContentRequest {
        let mut contents = self.history.clone();
        contents.push(Content::text(Role::User, text));
        GenerateContentRequest {
            contents,
            system_instruction: Some(Content::instruction(self.system_instruction.clone())),
        }
    }

    /// Append a completed exchange. Failed turns are never recorded.
    pub fn record_exchange(&mut self, user: &str, reply: &str) {
        self.history.push(Content::text(Role::User, user));
        self.history.push(Content::text(Role::Model, reply));
    }
}
