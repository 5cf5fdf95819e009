//! Input handling module for keyboard and command processing.
//!
//! All key input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Dispatched to appropriate handlers in the [`handlers`] module
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> Handler -> App mutation
//! ```
//!
//! # Example
//!
//! ```ignore
//! use omnitool::input::CommandRegistry;
//!
//! let registry = CommandRegistry::new();
//! app.handle_key(&registry, key_event);
//! ```

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, ModalType};
pub use keybindings::{KeyCombo, KeybindingConfig, PAGE_SCROLL};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::app::{App, Prompt};
use crate::clipboard::pasted_file_path;
use crate::models::AppModule;

impl App {
    /// Builds an InputContext from the current application state.
    pub fn build_input_context(&self) -> InputContext {
        let modal = match &self.prompt {
            None => ModalType::None,
            Some(Prompt::OpenFile { .. }) => ModalType::OpenFile,
            Some(Prompt::CreateGem { .. }) => ModalType::CreateGem,
        };
        let input_is_empty = match &self.prompt {
            Some(Prompt::OpenFile { input }) => input.text().is_empty(),
            Some(Prompt::CreateGem { name, instruction, .. }) => {
                name.text().is_empty() && instruction.text().is_empty()
            }
            None => self.chat.input.text().is_empty(),
        };

        InputContext {
            module: self.module,
            modal,
            input_is_empty,
        }
    }

    /// Executes a command, delegating to the appropriate handler.
    ///
    /// Returns `true` if the command was handled.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        debug!(?cmd, "execute_command");

        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        if self.prompt.is_some() {
            return handlers::handle_prompt_command(self, &cmd)
                || handlers::handle_editing_command(self, &cmd)
                || cmd == Command::Quit && handlers::handle_navigation_command(self, &cmd);
        }

        handlers::handle_editing_command(self, &cmd)
            || handlers::handle_navigation_command(self, &cmd)
            || handlers::handle_misc_command(self, &cmd)
    }

    /// Translate and execute one key press.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: KeyEvent) -> bool {
        let context = self.build_input_context();
        match registry.dispatch(key, &context) {
            Some(cmd) => self.execute_command(cmd),
            None => false,
        }
    }

    /// Handle bracketed paste.
    ///
    /// A pasted path to an existing file is loaded into the converter unless
    /// the user is typing a chat message or naming a gem. Other text goes into
    /// the focused input with newlines flattened.
    pub fn handle_paste(&mut self, text: String) {
        self.mark_dirty();

        let wants_text = match &self.prompt {
            Some(Prompt::CreateGem { .. }) => true,
            Some(Prompt::OpenFile { .. }) => false,
            None => self.module == AppModule::NeuralNexus,
        };

        if !wants_text {
            if let Some(path) = pasted_file_path(&text) {
                self.prompt = None;
                self.open_file(&path);
                return;
            }
        }

        let flat = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        if let Some(prompt) = self.prompt.as_mut() {
            prompt.focused_input().insert_str(&flat);
        } else if self.module == AppModule::NeuralNexus {
            self.chat.input.insert_str(&flat);
        }
    }
}
