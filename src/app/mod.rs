//! Application state for the TUI.
//!
//! `App` owns everything the renderer reads. Background work (loader scripts,
//! chat replies) runs in tokio tasks that report back through
//! [`AppMessage`] on `message_tx`; the event loop feeds them to
//! [`App::handle_message`].

mod actions;
mod handlers;
mod messages;
mod text_input;

pub use messages::AppMessage;
pub(crate) use actions::expand_home;
pub use text_input::TextInput;

use std::collections::HashSet;
use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::warn;

use crate::clipboard::default_export_dir;
use crate::gems::GemRegistry;
use crate::genai::{ChatSession, GenAiClient};
use crate::library::FileLibrary;
use crate::models::{AppModule, ChatMessage, TabOption};
use crate::startup::AppConfig;

/// Shown in place of a reply when a chat request fails.
pub const CHAT_ERROR_TEXT: &str = "Error: Connection interrupted.";

/// Neural Nexus conversation state.
#[derive(Debug, Default)]
pub struct ChatState {
    /// Transcript as displayed, including the greeting and error lines.
    pub messages: Vec<ChatMessage>,
    /// Held here while idle; moved into the request task while a reply is pending.
    pub session: Option<ChatSession>,
    pub awaiting_reply: bool,
    /// Bumped on every gem activation so late replies can be recognized.
    pub epoch: u64,
    pub input: TextInput,
    /// Lines scrolled up from the bottom of the transcript.
    pub scroll_from_bottom: u16,
}

/// Which field of the gem creator has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GemField {
    Name,
    Instruction,
}

/// Modal prompts drawn over the current module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    OpenFile {
        input: TextInput,
    },
    CreateGem {
        name: TextInput,
        instruction: TextInput,
        field: GemField,
    },
}

impl Prompt {
    pub fn open_file() -> Self {
        Prompt::OpenFile {
            input: TextInput::new(),
        }
    }

    pub fn create_gem() -> Self {
        Prompt::CreateGem {
            name: TextInput::new(),
            instruction: TextInput::new(),
            field: GemField::Name,
        }
    }

    /// The input that receives typed characters.
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self {
            Prompt::OpenFile { input } => input,
            Prompt::CreateGem {
                name,
                instruction,
                field,
            } => match field {
                GemField::Name => name,
                GemField::Instruction => instruction,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct App {
    pub module: AppModule,
    /// Highlighted card on the dashboard.
    pub dashboard_index: usize,
    pub should_quit: bool,
    pub needs_redraw: bool,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    pub config: AppConfig,
    /// `None` when no API key is configured.
    pub client: Option<GenAiClient>,
    pub library: FileLibrary,
    pub active_tab: TabOption,
    /// File ids with a loader-script request in flight.
    pub loading_scripts: HashSet<String>,
    /// Lines scrolled in the converter output.
    pub content_scroll: u16,
    pub gems: GemRegistry,
    pub chat: ChatState,
    pub prompt: Option<Prompt>,
    pub status: Option<StatusMessage>,
    pub export_dir: PathBuf,
    /// Receiver for async messages; taken by the event loop.
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Build the app. A client that cannot be built leaves AI features off.
    pub fn new(config: AppConfig) -> Self {
        let client = match GenAiClient::from_config(&config) {
            Ok(client) => Some(client),
            Err(err) => {
                warn!(error = %err, "AI features disabled");
                None
            }
        };
        Self::with_client(config, client)
    }

    /// Build the app around an explicit client (or none).
    pub fn with_client(config: AppConfig, client: Option<GenAiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            module: AppModule::default(),
            dashboard_index: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            config,
            client,
            library: FileLibrary::new(),
            active_tab: TabOption::default(),
            loading_scripts: HashSet::new(),
            content_scroll: 0,
            gems: GemRegistry::new(),
            chat: ChatState::default(),
            prompt: None,
            status: None,
            export_dir: default_export_dir(),
            message_rx: Some(message_rx),
            message_tx,
        };
        app.reset_chat();
        app
    }

    pub fn ai_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        // Spinners only move while something is in flight.
        if self.chat.awaiting_reply || !self.loading_scripts.is_empty() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn navigate(&mut self, module: AppModule) {
        if self.module != module {
            self.module = module;
            self.status = None;
            self.mark_dirty();
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
        self.mark_dirty();
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
        self.mark_dirty();
    }

    /// Whether the active file's loader script is still being generated.
    pub fn is_active_script_loading(&self) -> bool {
        self.library
            .active_id()
            .is_some_and(|id| self.loading_scripts.contains(id))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_new_without_key_disables_ai() {
        let app = App::new(AppConfig::default());
        assert!(!app.ai_enabled());
        assert_eq!(app.module, AppModule::Dashboard);
    }

    #[test]
    fn test_initial_transcript_is_greeting() {
        let app = offline_app();
        assert_eq!(app.chat.messages.len(), 1);
        assert_eq!(
            app.chat.messages[0].text,
            "System initialized. ROG Assistant active. General purpose AI assistant."
        );
        assert!(app.chat.session.is_none());
    }

    #[test]
    fn test_navigate_clears_status() {
        let mut app = offline_app();
        app.set_error("boom");
        app.navigate(AppModule::Converter);
        assert!(app.status.is_none());
        assert_eq!(app.module, AppModule::Converter);
    }

    #[test]
    fn test_tick_marks_dirty_only_while_busy() {
        let mut app = offline_app();
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);

        app.chat.awaiting_reply = true;
        app.tick();
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_prompt_focus_follows_field() {
        let mut prompt = Prompt::create_gem();
        prompt.focused_input().insert_str("Poet");
        if let Prompt::CreateGem { field, .. } = &mut prompt {
            *field = GemField::Instruction;
        }
        prompt.focused_input().insert_str("Rhyme.");
        match prompt {
            Prompt::CreateGem { name, instruction, .. } => {
                assert_eq!(name.text(), "Poet");
                assert_eq!(instruction.text(), "Rhyme.");
            }
            _ => unreachable!(),
        }
    }
}
