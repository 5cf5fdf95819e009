//! Messages posted by background tasks to the event loop.

use crate::genai::{ChatSession, GenAiResult};

#[derive(Debug)]
pub enum AppMessage {
    /// Loader script finished (or failed into placeholder text) for a file.
    ScriptReady { file_id: String, script: String },
    /// A chat reply came back. The session travels with it so only one
    /// owner ever holds it.
    ChatReply {
        gem_id: String,
        /// Conversation generation the request belonged to.
        epoch: u64,
        session: ChatSession,
        result: GenAiResult<String>,
    },
}
