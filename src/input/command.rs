//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum is the single vocabulary between key bindings and
//! the handlers that mutate [`App`](crate::app::App).

use crate::models::{AppModule, TabOption};

/// Represents all possible commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q outside text input)
    Quit,
    /// Jump to a module (Alt+1..3, F1..F3)
    SwitchModule(AppModule),
    /// Return to the dashboard (Esc)
    Back,

    // =========================================================================
    // Dashboard
    // =========================================================================
    PrevCard,
    NextCard,
    /// Open the highlighted module card (Enter)
    OpenCard,

    // =========================================================================
    // Scroll Commands
    // =========================================================================
    /// Scroll toward older content by N lines
    ScrollUp(u16),
    /// Scroll toward newer content by N lines
    ScrollDown(u16),

    // =========================================================================
    // Input/Editing Commands
    // =========================================================================
    InsertChar(char),
    Backspace,
    DeleteChar,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    /// Submit the focused input (Enter)
    Submit,

    // =========================================================================
    // Neural Nexus
    // =========================================================================
    NextGem,
    PrevGem,
    /// Open the gem creator (Ctrl+N)
    OpenGemCreator,

    // =========================================================================
    // Converter
    // =========================================================================
    /// Open the file path prompt (o)
    OpenFilePrompt,
    NextFile,
    PrevFile,
    NextTab,
    PrevTab,
    SelectTab(TabOption),
    RemoveFile,
    /// Copy the active tab's content (c)
    CopyContent,
    /// Write the active tab's content to the export directory (s)
    SaveContent,

    // =========================================================================
    // Prompt Commands
    // =========================================================================
    /// Close the open prompt without submitting (Esc)
    CancelPrompt,
    /// Move focus between prompt fields (Tab)
    SwitchField,

    /// Swallow the key
    Noop,
}

impl Command {
    /// Whether executing this command can change what is on screen.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    /// Whether this command edits text.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::DeleteChar
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
        )
    }
}
