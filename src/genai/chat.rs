//! Multi-turn chat sessions.

use tracing::debug;

use super::error::GenAiResult;
use super::wire::{Content, GenerateContentRequest};
use super::GenAiClient;

/// A conversation bound to one model and one system instruction.
///
/// History only grows when a reply arrives; a failed send leaves it unchanged.
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: GenAiClient,
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(
        client: GenAiClient,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            client,
            model: model.into(),
            system_instruction: system_instruction.into(),
            history: Vec::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Send `text` as the next user turn and return the model's reply.
    pub async fn send_message(&mut self, text: &str) -> GenAiResult<String> {
        let mut contents = self.history.clone();
        contents.push(Content::user(text));
        let request =
            GenerateContentRequest::new(contents).with_system_instruction(&self.system_instruction);

        let reply = self.client.generate_content(&self.model, &request).await?;

        self.history.push(Content::user(text));
        self.history.push(Content::model(reply.clone()));
        debug!(turns = self.history.len(), "chat history updated");
        Ok(reply)
    }
}
