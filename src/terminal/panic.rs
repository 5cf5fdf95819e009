//! Panic hook that gives the user their terminal back.

use super::setup::emergency_restore;
use std::panic;

/// Restore the terminal, then run the previously installed hook.
///
/// Call before creating the [`TerminalManager`](super::TerminalManager) and
/// after `color_eyre::install()`, so the eyre report prints on a sane screen.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
