/// Output views of the converter, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabOption {
    #[default]
    Binary,
    CArray,
    PythonRaw,
    Base64,
    PythonSmart,
}

impl TabOption {
    pub const ALL: [TabOption; 5] = [
        TabOption::Binary,
        TabOption::CArray,
        TabOption::PythonRaw,
        TabOption::Base64,
        TabOption::PythonSmart,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TabOption::Binary => "Binary",
            TabOption::CArray => "C/C++",
            TabOption::PythonRaw => "Py Raw",
            TabOption::Base64 => "Base64",
            TabOption::PythonSmart => "AI Smart",
        }
    }

    /// Name used when the tab's content is saved to disk.
    pub fn filename(&self) -> &'static str {
        match self {
            TabOption::Binary => "dump.bin",
            TabOption::CArray => "data.c",
            TabOption::PythonRaw => "raw_loader.py",
            TabOption::Base64 => "data.b64",
            TabOption::PythonSmart => "smart_loader.py",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
