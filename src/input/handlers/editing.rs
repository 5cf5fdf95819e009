//! Editing command handlers.

use crate::app::{App, TextInput};
use crate::input::Command;
use crate::models::AppModule;

/// The text input that currently has focus, if any.
fn focused_input(app: &mut App) -> Option<&mut TextInput> {
    if let Some(prompt) = app.prompt.as_mut() {
        return Some(prompt.focused_input());
    }
    (app.module == AppModule::NeuralNexus).then_some(&mut app.chat.input)
}

/// Handles editing-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_editing_command(app: &mut App, cmd: &Command) -> bool {
    if !cmd.is_editing() {
        return false;
    }
    let Some(input) = focused_input(app) else {
        return false;
    };

    match cmd {
        Command::InsertChar(c) => input.insert_char(*c),
        Command::Backspace => input.backspace(),
        Command::DeleteChar => input.delete(),
        Command::MoveCursorLeft => input.move_left(),
        Command::MoveCursorRight => input.move_right(),
        Command::MoveCursorHome => input.move_home(),
        Command::MoveCursorEnd => input.move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::offline_app;
    use crate::app::Prompt;

    #[test]
    fn test_typing_goes_to_chat_input() {
        let mut app = offline_app();
        app.navigate(AppModule::NeuralNexus);
        for c in "hey".chars() {
            assert!(handle_editing_command(&mut app, &Command::InsertChar(c)));
        }
        handle_editing_command(&mut app, &Command::Backspace);
        assert_eq!(app.chat.input.text(), "he");
    }

    #[test]
    fn test_typing_goes_to_prompt_first() {
        let mut app = offline_app();
        app.navigate(AppModule::NeuralNexus);
        app.prompt = Some(Prompt::open_file());
        handle_editing_command(&mut app, &Command::InsertChar('/'));
        assert!(app.chat.input.text().is_empty());
        match &app.prompt {
            Some(Prompt::OpenFile { input }) => assert_eq!(input.text(), "/"),
            other => panic!("unexpected prompt {:?}", other),
        }
    }

    #[test]
    fn test_no_input_on_dashboard() {
        let mut app = offline_app();
        assert!(!handle_editing_command(&mut app, &Command::InsertChar('x')));
    }
}
