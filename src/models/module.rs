/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppModule {
    #[default]
    Dashboard,
    NeuralNexus,
    Converter,
}

impl AppModule {
    pub const ALL: [AppModule; 3] = [
        AppModule::Dashboard,
        AppModule::NeuralNexus,
        AppModule::Converter,
    ];

    /// Modules with a launch card on the dashboard.
    pub const CARDS: [AppModule; 2] = [AppModule::NeuralNexus, AppModule::Converter];

    pub fn label(&self) -> &'static str {
        match self {
            AppModule::Dashboard => "DASHBOARD",
            AppModule::NeuralNexus => "NEURAL NEXUS",
            AppModule::Converter => "UNI CONVERTER",
        }
    }

    /// Digit key that jumps to this module.
    pub fn hotkey(&self) -> char {
        match self {
            AppModule::Dashboard => '1',
            AppModule::NeuralNexus => '2',
            AppModule::Converter => '3',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.hotkey() == c)
    }

    pub fn index(&self) -> usize {
        match self {
            AppModule::Dashboard => 0,
            AppModule::NeuralNexus => 1,
            AppModule::Converter => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(AppModule::default(), AppModule::Dashboard);
    }

    #[test]
    fn test_hotkeys_round_trip() {
        for module in AppModule::ALL {
            assert_eq!(AppModule::from_hotkey(module.hotkey()), Some(module));
        }
        assert_eq!(AppModule::from_hotkey('9'), None);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(AppModule::Converter.next(), AppModule::Dashboard);
    }
}
