//! Input context for determining which commands are available.

use crate::models::AppModule;

/// The modal prompt currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalType {
    #[default]
    None,
    /// File path prompt (Converter)
    OpenFile,
    /// Custom gem creator (Neural Nexus)
    CreateGem,
}

/// Snapshot of the app state the registry needs to pick a command.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub module: AppModule,
    pub modal: ModalType,
    /// Whether the focused text input is empty
    pub input_is_empty: bool,
}

impl InputContext {
    pub fn new(module: AppModule) -> Self {
        Self {
            module,
            modal: ModalType::None,
            input_is_empty: true,
        }
    }

    pub fn with_modal(mut self, modal: ModalType) -> Self {
        self.modal = modal;
        self
    }

    pub fn is_modal_active(&self) -> bool {
        self.modal != ModalType::None
    }

    /// Whether printable keys go to a text input rather than shortcuts.
    pub fn is_typing(&self) -> bool {
        self.is_modal_active() || self.module == AppModule::NeuralNexus
    }
}
