//! Value types shared by the UI and the application state.

mod message;
mod module;
mod tab;

pub use message::{ChatMessage, ChatRole};
pub use module::AppModule;
pub use tab::TabOption;
