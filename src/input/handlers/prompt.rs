//! Prompt command handlers.

use tracing::debug;

use crate::app::{expand_home, App, GemField, Prompt};
use crate::input::Command;

/// Handles commands while a prompt is open.
///
/// Returns `true` if the command was handled.
pub fn handle_prompt_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::CancelPrompt => {
            app.prompt = None;
            true
        }
        Command::SwitchField => {
            if let Some(Prompt::CreateGem { field, .. }) = app.prompt.as_mut() {
                *field = match field {
                    GemField::Name => GemField::Instruction,
                    GemField::Instruction => GemField::Name,
                };
            }
            true
        }
        Command::Submit => {
            submit_prompt(app);
            true
        }
        _ => false,
    }
}

fn submit_prompt(app: &mut App) {
    match app.prompt.as_mut() {
        Some(Prompt::OpenFile { input }) => {
            if input.is_blank() {
                return;
            }
            let path = expand_home(input.text().trim());
            debug!(path = %path.display(), "open file prompt submitted");
            app.prompt = None;
            app.open_file(&path);
        }
        Some(Prompt::CreateGem { field, .. }) => {
            if *field == GemField::Name {
                *field = GemField::Instruction;
            } else {
                app.submit_gem_prompt();
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::offline_app;
    use crate::models::AppModule;

    #[test]
    fn test_cancel_closes_prompt() {
        let mut app = offline_app();
        app.prompt = Some(Prompt::create_gem());
        assert!(handle_prompt_command(&mut app, &Command::CancelPrompt));
        assert!(app.prompt.is_none());
    }

    #[test]
    fn test_enter_on_name_moves_to_instruction() {
        let mut app = offline_app();
        app.prompt = Some(Prompt::create_gem());
        handle_prompt_command(&mut app, &Command::Submit);
        assert!(matches!(
            app.prompt,
            Some(Prompt::CreateGem {
                field: GemField::Instruction,
                ..
            })
        ));
        handle_prompt_command(&mut app, &Command::SwitchField);
        assert!(matches!(
            app.prompt,
            Some(Prompt::CreateGem {
                field: GemField::Name,
                ..
            })
        ));
    }

    #[test]
    fn test_open_file_prompt_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let mut app = offline_app();
        let mut prompt = Prompt::open_file();
        prompt.focused_input().insert_str(&format!("  {}  ", path.display()));
        app.prompt = Some(prompt);

        handle_prompt_command(&mut app, &Command::Submit);
        assert!(app.prompt.is_none());
        assert_eq!(app.module, AppModule::Converter);
        assert_eq!(app.library.active().unwrap().name, "blob.bin");
    }

    #[test]
    fn test_blank_open_file_prompt_stays_open() {
        let mut app = offline_app();
        app.prompt = Some(Prompt::open_file());
        handle_prompt_command(&mut app, &Command::Submit);
        assert!(app.prompt.is_some());
    }
}
