//! Default keybindings for the application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::ModalType;
use crate::models::{AppModule, TabOption};

/// Lines moved by PageUp/PageDown.
pub const PAGE_SCROLL: u16 = 10;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Shift is already encoded in the character (and in BackTab), so it is
    /// dropped for those keys.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active outside prompts)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per modal type
    pub modal: HashMap<ModalType, HashMap<KeyCombo, Command>>,
    /// Keybindings per module
    pub module: HashMap<AppModule, HashMap<KeyCombo, Command>>,
    /// Cursor and deletion keys for any focused text input
    pub input_editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            modal: HashMap::new(),
            module: HashMap::new(),
            input_editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_modal_bindings();
        config.setup_module_bindings();
        config.setup_input_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        for (n, module) in AppModule::ALL.into_iter().enumerate() {
            self.global.insert(
                KeyCombo::alt(KeyCode::Char(module.hotkey())),
                Command::SwitchModule(module),
            );
            self.global.insert(
                KeyCombo::plain(KeyCode::F(n as u8 + 1)),
                Command::SwitchModule(module),
            );
        }
    }

    fn setup_modal_bindings(&mut self) {
        let mut open_file = HashMap::new();
        open_file.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        open_file.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelPrompt);
        self.modal.insert(ModalType::OpenFile, open_file);

        let mut create_gem = HashMap::new();
        create_gem.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        create_gem.insert(KeyCombo::plain(KeyCode::Esc), Command::CancelPrompt);
        create_gem.insert(KeyCombo::plain(KeyCode::Tab), Command::SwitchField);
        create_gem.insert(KeyCombo::plain(KeyCode::BackTab), Command::SwitchField);
        self.modal.insert(ModalType::CreateGem, create_gem);
    }

    fn setup_module_bindings(&mut self) {
        // Dashboard
        let mut dashboard = HashMap::new();
        for module in AppModule::ALL {
            dashboard.insert(
                KeyCombo::plain(KeyCode::Char(module.hotkey())),
                Command::SwitchModule(module),
            );
        }
        dashboard.insert(KeyCombo::plain(KeyCode::Left), Command::PrevCard);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('h')), Command::PrevCard);
        dashboard.insert(KeyCombo::plain(KeyCode::Right), Command::NextCard);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('l')), Command::NextCard);
        dashboard.insert(KeyCombo::plain(KeyCode::Tab), Command::NextCard);
        dashboard.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenCard);
        dashboard.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.module.insert(AppModule::Dashboard, dashboard);

        // Neural Nexus: printable keys type into the message box
        let mut nexus = HashMap::new();
        nexus.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        nexus.insert(KeyCombo::plain(KeyCode::Tab), Command::NextGem);
        nexus.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevGem);
        nexus.insert(KeyCombo::ctrl(KeyCode::Char('n')), Command::OpenGemCreator);
        nexus.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollUp(PAGE_SCROLL));
        nexus.insert(
            KeyCombo::plain(KeyCode::PageDown),
            Command::ScrollDown(PAGE_SCROLL),
        );
        nexus.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.module.insert(AppModule::NeuralNexus, nexus);

        // Converter
        let mut converter = HashMap::new();
        converter.insert(KeyCombo::plain(KeyCode::Char('o')), Command::OpenFilePrompt);
        converter.insert(KeyCombo::plain(KeyCode::Up), Command::PrevFile);
        converter.insert(KeyCombo::plain(KeyCode::Char('k')), Command::PrevFile);
        converter.insert(KeyCombo::plain(KeyCode::Down), Command::NextFile);
        converter.insert(KeyCombo::plain(KeyCode::Char('j')), Command::NextFile);
        converter.insert(KeyCombo::plain(KeyCode::Right), Command::NextTab);
        converter.insert(KeyCombo::plain(KeyCode::Char('l')), Command::NextTab);
        converter.insert(KeyCombo::plain(KeyCode::Tab), Command::NextTab);
        converter.insert(KeyCombo::plain(KeyCode::Left), Command::PrevTab);
        converter.insert(KeyCombo::plain(KeyCode::Char('h')), Command::PrevTab);
        converter.insert(KeyCombo::plain(KeyCode::BackTab), Command::PrevTab);
        for (n, tab) in TabOption::ALL.into_iter().enumerate() {
            let digit = char::from(b'1' + n as u8);
            converter.insert(KeyCombo::plain(KeyCode::Char(digit)), Command::SelectTab(tab));
        }
        converter.insert(KeyCombo::plain(KeyCode::Char('d')), Command::RemoveFile);
        converter.insert(KeyCombo::plain(KeyCode::Delete), Command::RemoveFile);
        converter.insert(KeyCombo::plain(KeyCode::Char('c')), Command::CopyContent);
        converter.insert(KeyCombo::plain(KeyCode::Char('s')), Command::SaveContent);
        converter.insert(KeyCombo::plain(KeyCode::PageUp), Command::ScrollUp(PAGE_SCROLL));
        converter.insert(
            KeyCombo::plain(KeyCode::PageDown),
            Command::ScrollDown(PAGE_SCROLL),
        );
        converter.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        converter.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.module.insert(AppModule::Converter, converter);
    }

    fn setup_input_editing_bindings(&mut self) {
        let bindings = [
            (KeyCode::Backspace, Command::Backspace),
            (KeyCode::Delete, Command::DeleteChar),
            (KeyCode::Left, Command::MoveCursorLeft),
            (KeyCode::Right, Command::MoveCursorRight),
            (KeyCode::Home, Command::MoveCursorHome),
            (KeyCode::End, Command::MoveCursorEnd),
        ];
        for (code, cmd) in bindings {
            self.input_editing.insert(KeyCombo::plain(code), cmd);
        }
        self.input_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::MoveCursorHome);
        self.input_editing
            .insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_modal(&self, modal: ModalType, combo: &KeyCombo) -> Option<&Command> {
        self.modal.get(&modal).and_then(|m| m.get(combo))
    }

    pub fn get_module(&self, module: AppModule, combo: &KeyCombo) -> Option<&Command> {
        self.module.get(&module).and_then(|m| m.get(combo))
    }

    pub fn get_input_editing(&self, combo: &KeyCombo) -> Option<&Command> {
        self.input_editing.get(combo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn test_shift_is_dropped_for_chars() {
        let key = KeyEvent {
            code: KeyCode::Char('N'),
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(KeyCombo::from_event(&key), KeyCombo::plain(KeyCode::Char('N')));

        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeyCombo::from_event(&key), KeyCombo::plain(KeyCode::BackTab));
    }

    #[test]
    fn test_shift_is_kept_for_other_keys() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(KeyCombo::from_event(&key).modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_global_module_hotkeys() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_global(&KeyCombo::alt(KeyCode::Char('3'))),
            Some(&Command::SwitchModule(AppModule::Converter))
        );
        assert_eq!(
            config.get_global(&KeyCombo::plain(KeyCode::F(2))),
            Some(&Command::SwitchModule(AppModule::NeuralNexus))
        );
    }

    #[test]
    fn test_converter_tab_digits() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_module(AppModule::Converter, &KeyCombo::plain(KeyCode::Char('5'))),
            Some(&Command::SelectTab(TabOption::PythonSmart))
        );
    }

    #[test]
    fn test_gem_creator_modal_bindings() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_modal(ModalType::CreateGem, &KeyCombo::plain(KeyCode::Tab)),
            Some(&Command::SwitchField)
        );
        assert!(config
            .get_modal(ModalType::OpenFile, &KeyCombo::plain(KeyCode::Tab))
            .is_none());
    }
}
