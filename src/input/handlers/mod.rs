//! Command handlers for executing commands.
//!
//! - [`editing`] - text input editing for prompts and the chat box
//! - [`prompt`] - submit/cancel/field focus for open prompts
//! - [`navigation`] - module, card, file, tab and gem selection; scrolling
//! - [`misc`] - actions (send, copy, save, remove, open prompts)

pub mod editing;
pub mod misc;
pub mod navigation;
pub mod prompt;

pub use editing::*;
pub use misc::*;
pub use navigation::*;
pub use prompt::*;
