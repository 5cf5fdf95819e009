//! Action command handlers.

use crate::app::{App, Prompt};
use crate::input::Command;
use crate::models::AppModule;

/// Handles commands that trigger actions rather than movement.
///
/// Returns `true` if the command was handled.
pub fn handle_misc_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Submit if app.module == AppModule::NeuralNexus => app.submit_chat(),
        Command::OpenGemCreator => app.prompt = Some(Prompt::create_gem()),
        Command::OpenFilePrompt => app.prompt = Some(Prompt::open_file()),
        Command::RemoveFile => app.remove_active_file(),
        Command::CopyContent => app.copy_active_content(),
        Command::SaveContent => {
            app.save_active_content();
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::offline_app;
    use crate::library::FileRecord;

    #[test]
    fn test_open_prompts() {
        let mut app = offline_app();
        handle_misc_command(&mut app, &Command::OpenFilePrompt);
        assert!(matches!(app.prompt, Some(Prompt::OpenFile { .. })));
        handle_misc_command(&mut app, &Command::OpenGemCreator);
        assert!(matches!(app.prompt, Some(Prompt::CreateGem { .. })));
    }

    #[test]
    fn test_submit_outside_nexus_is_unhandled() {
        let mut app = offline_app();
        assert!(!handle_misc_command(&mut app, &Command::Submit));
    }

    #[test]
    fn test_remove_file() {
        let mut app = offline_app();
        app.add_record(FileRecord::from_bytes("a", None, vec![1]));
        handle_misc_command(&mut app, &Command::RemoveFile);
        assert!(app.library.is_empty());
    }
}
