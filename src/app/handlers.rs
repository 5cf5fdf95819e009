//! Message handling for the App.

use tracing::{debug, warn};

use super::{App, AppMessage, CHAT_ERROR_TEXT};
use crate::models::ChatMessage;

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ScriptReady { file_id, script } => {
                self.loading_scripts.remove(&file_id);
                if !self.library.set_script(&file_id, script) {
                    debug!(%file_id, "loader script for removed file dropped");
                }
            }
            AppMessage::ChatReply {
                gem_id,
                epoch,
                session,
                result,
            } => {
                if epoch != self.chat.epoch {
                    debug!(%gem_id, epoch, "stale chat reply dropped");
                    return;
                }
                self.chat.session = Some(session);
                self.chat.awaiting_reply = false;
                let text = result.unwrap_or_else(|err| {
                    warn!(%gem_id, code = err.error_code(), error = %err, "chat request failed");
                    CHAT_ERROR_TEXT.to_string()
                });
                self.chat.messages.push(ChatMessage::model(text));
                self.chat.scroll_from_bottom = 0;
            }
        }
    }
}
