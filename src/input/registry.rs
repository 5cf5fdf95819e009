//! Command registry for dispatching keyboard input to commands.
//!
//! Priority, highest first:
//! 1. Ctrl+C (always quits)
//! 2. Modal bindings, then editing keys and printable characters for the prompt
//! 3. Global bindings (module hotkeys)
//! 4. Module bindings
//! 5. Editing keys and printable characters, when the module has a text input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::InputContext;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command based on the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from_event(&key);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        // A prompt takes over all input
        if context.is_modal_active() {
            if let Some(cmd) = self.config.get_modal(context.modal, &combo) {
                return Some(cmd.clone());
            }
            return Some(self.dispatch_text(key, &combo).unwrap_or(Command::Noop));
        }

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }

        if let Some(cmd) = self.config.get_module(context.module, &combo) {
            return Some(cmd.clone());
        }

        if context.is_typing() {
            return self.dispatch_text(key, &combo);
        }

        None
    }

    fn dispatch_text(&self, key: KeyEvent, combo: &KeyCombo) -> Option<Command> {
        if let Some(cmd) = self.config.get_input_editing(combo) {
            return Some(cmd.clone());
        }
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}
