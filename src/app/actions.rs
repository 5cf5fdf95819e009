//! State transitions triggered by user input.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{App, AppMessage, Prompt};
use crate::clipboard::{copy_to_clipboard, save_output};
use crate::error::ConfigError;
use crate::genai::{generate_loader_script, script_error_placeholder};
use crate::library::FileRecord;
use crate::models::{AppModule, ChatMessage, TabOption};

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(raw)),
        None => PathBuf::from(raw),
    }
}

impl App {
    // ------------------------------------------------------------------
    // Converter
    // ------------------------------------------------------------------

    /// Read a file into the library, select it and request its loader script.
    pub fn open_file(&mut self, path: &Path) -> bool {
        match FileRecord::from_path(path) {
            Ok(record) => {
                self.add_record(record);
                true
            }
            Err(err) => {
                self.set_error(err.user_message());
                false
            }
        }
    }

    pub fn add_record(&mut self, record: FileRecord) {
        let (id, name, mime, hex) = (
            record.id.clone(),
            record.name.clone(),
            record.mime_type.clone(),
            record.hex.text.clone(),
        );
        info!(%id, %name, size = record.size, "file loaded");
        self.set_status(format!("Loaded {}", name));

        self.library.add(record);
        self.active_tab = TabOption::Binary;
        self.content_scroll = 0;
        self.navigate(AppModule::Converter);
        self.request_loader_script(id, name, mime, hex);
    }

    fn request_loader_script(&mut self, file_id: String, name: String, mime: String, hex: String) {
        let Some(client) = self.client.clone() else {
            let placeholder = script_error_placeholder(&ConfigError::MissingApiKey.to_string());
            self.library.set_script(&file_id, placeholder);
            return;
        };

        self.loading_scripts.insert(file_id.clone());
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let script = generate_loader_script(&client, &name, &mime, &hex).await;
            let _ = tx.send(AppMessage::ScriptReady { file_id, script });
        });
    }

    pub fn remove_active_file(&mut self) {
        let Some(id) = self.library.active_id().map(str::to_string) else {
            return;
        };
        if let Some(record) = self.library.remove(&id) {
            self.loading_scripts.remove(&id);
            self.content_scroll = 0;
            self.set_status(format!("Removed {}", record.name));
        }
    }

    pub fn select_next_file(&mut self) {
        self.library.select_next();
        self.content_scroll = 0;
        self.mark_dirty();
    }

    pub fn select_prev_file(&mut self) {
        self.library.select_prev();
        self.content_scroll = 0;
        self.mark_dirty();
    }

    pub fn select_tab(&mut self, tab: TabOption) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.content_scroll = 0;
            self.mark_dirty();
        }
    }

    /// Text of the active tab for the active file.
    pub fn active_content(&self) -> Option<String> {
        self.library
            .active()
            .map(|record| record.tab_content(self.active_tab))
    }

    pub fn copy_active_content(&mut self) {
        let Some(content) = self.active_content() else {
            self.set_error("No file selected");
            return;
        };
        match copy_to_clipboard(&content) {
            Ok(()) => self.set_status(format!("Copied {} to clipboard", self.active_tab.label())),
            Err(err) => self.set_error(err.user_message()),
        }
    }

    pub fn save_active_content(&mut self) -> Option<PathBuf> {
        let Some(content) = self.active_content() else {
            self.set_error("No file selected");
            return None;
        };
        match save_output(&self.export_dir, self.active_tab.filename(), &content) {
            Ok(path) => {
                self.set_status(format!("Saved {}", path.display()));
                Some(path)
            }
            Err(err) => {
                self.set_error(err.user_message());
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Neural Nexus
    // ------------------------------------------------------------------

    /// Start a fresh conversation for the active gem.
    pub(super) fn reset_chat(&mut self) {
        let gem = self.gems.active();
        self.chat.epoch = self.chat.epoch.wrapping_add(1);
        self.chat.messages = vec![ChatMessage::model(gem.greeting())];
        self.chat.session = self
            .client
            .as_ref()
            .map(|client| client.start_chat(gem.system_instruction.clone()));
        self.chat.awaiting_reply = false;
        self.chat.scroll_from_bottom = 0;
        info!(gem = %gem.id, "chat session started");
        self.mark_dirty();
    }

    pub fn activate_gem(&mut self, id: &str) {
        if self.gems.select(id) {
            self.reset_chat();
        }
    }

    pub fn activate_gem_offset(&mut self, forward: bool) {
        let len = self.gems.gems().len();
        let current = self.gems.active_index();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        if self.gems.select_index(next) {
            self.reset_chat();
        }
    }

    /// Create a gem from the open creator prompt.
    pub fn submit_gem_prompt(&mut self) {
        let Some(Prompt::CreateGem {
            name, instruction, ..
        }) = &self.prompt
        else {
            return;
        };
        let (name, instruction) = (name.text().to_string(), instruction.text().to_string());

        match self.gems.create_custom(&name, &instruction) {
            Ok(gem) => {
                let label = gem.name.clone();
                self.prompt = None;
                self.reset_chat();
                self.set_status(format!("Gem {} initialized", label));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Send the typed message to the active gem.
    pub fn submit_chat(&mut self) {
        if self.chat.input.is_blank() {
            return;
        }
        if self.chat.awaiting_reply {
            self.set_status("Still waiting for the previous reply");
            return;
        }
        let Some(mut session) = self.chat.session.take() else {
            self.set_error(ConfigError::MissingApiKey.user_message());
            return;
        };

        let text = self.chat.input.take();
        self.chat.messages.push(ChatMessage::user(text.clone()));
        self.chat.awaiting_reply = true;
        self.chat.scroll_from_bottom = 0;
        self.mark_dirty();

        let gem_id = self.gems.active().id.clone();
        let epoch = self.chat.epoch;
        let tx = self.message_tx.clone();
        debug!(%gem_id, epoch, "chat request spawned");
        tokio::spawn(async move {
            let result = session.send_message(&text).await;
            let _ = tx.send(AppMessage::ChatReply {
                gem_id,
                epoch,
                session,
                result,
            });
        });
    }
}
