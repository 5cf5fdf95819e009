//! Navigation command handlers.

use crate::app::App;
use crate::input::Command;
use crate::models::AppModule;

/// Handles navigation-related commands.
///
/// Returns `true` if the command was handled.
pub fn handle_navigation_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::Quit => app.quit(),
        Command::SwitchModule(module) => app.navigate(*module),
        Command::Back => app.navigate(AppModule::Dashboard),

        Command::PrevCard => {
            let len = AppModule::CARDS.len();
            app.dashboard_index = (app.dashboard_index + len - 1) % len;
        }
        Command::NextCard => {
            app.dashboard_index = (app.dashboard_index + 1) % AppModule::CARDS.len();
        }
        Command::OpenCard => {
            if let Some(module) = AppModule::CARDS.get(app.dashboard_index) {
                app.navigate(*module);
            }
        }

        Command::ScrollUp(lines) => match app.module {
            AppModule::NeuralNexus => {
                app.chat.scroll_from_bottom = app.chat.scroll_from_bottom.saturating_add(*lines)
            }
            AppModule::Converter => app.content_scroll = app.content_scroll.saturating_sub(*lines),
            AppModule::Dashboard => return false,
        },
        Command::ScrollDown(lines) => match app.module {
            AppModule::NeuralNexus => {
                app.chat.scroll_from_bottom = app.chat.scroll_from_bottom.saturating_sub(*lines)
            }
            AppModule::Converter => app.content_scroll = app.content_scroll.saturating_add(*lines),
            AppModule::Dashboard => return false,
        },

        Command::NextFile => app.select_next_file(),
        Command::PrevFile => app.select_prev_file(),
        Command::NextTab => app.select_tab(app.active_tab.next()),
        Command::PrevTab => app.select_tab(app.active_tab.prev()),
        Command::SelectTab(tab) => app.select_tab(*tab),

        Command::NextGem => app.activate_gem_offset(true),
        Command::PrevGem => app.activate_gem_offset(false),

        _ => return false,
    }
    true
}
