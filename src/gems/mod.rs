//! Persona ("gem") registry for Neural Nexus.
//!
//! Three presets ship with the tool. Users can add custom gems for the
//! lifetime of the process; nothing is persisted.

use chrono::Utc;
use ratatui::style::Color;
use thiserror::Error;
use tracing::info;

/// A chat persona: display metadata plus the system instruction sent with
/// every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeuralGem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub system_instruction: String,
    pub color: Color,
}

impl NeuralGem {
    fn preset(id: &str, name: &str, description: &str, instruction: &str, color: Color) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            system_instruction: instruction.to_string(),
            color,
        }
    }

    /// First transcript line after the gem becomes active.
    pub fn greeting(&self) -> String {
        format!(
            "System initialized. {} active. {}",
            self.name, self.description
        )
    }
}

pub const DEFAULT_GEM_ID: &str = "gem_default";
pub const CUSTOM_GEM_DESCRIPTION: &str = "Custom User Gem";

pub fn preset_gems() -> Vec<NeuralGem> {
    vec![
        NeuralGem::preset(
            DEFAULT_GEM_ID,
            "ROG Assistant",
            "General purpose AI assistant.",
            "You are a helpful AI assistant integrated into the ASUS ROG Omni-Tool interface. You are concise, tech-savvy, and helpful.",
            Color::Rgb(0xff, 0x00, 0x33),
        ),
        NeuralGem::preset(
            "gem_coder",
            "Code Architect",
            "Expert in Python, React, and Systems Programming.",
            "You are an elite senior software engineer. You specialize in clean, efficient code. You prefer TypeScript and Python. You answer with code blocks and minimal fluff.",
            Color::Rgb(0x00, 0xcc, 0xff),
        ),
        NeuralGem::preset(
            "gem_sec",
            "NetRunner",
            "Cybersecurity and Hex analysis expert.",
            "You are a cybersecurity expert. You analyze data for vulnerabilities. You speak in cyberpunk slang occasionally. You are paranoid but helpful.",
            Color::Rgb(0x9d, 0x00, 0xff),
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GemError {
    #[error("gem name is required")]
    MissingName,
    #[error("gem system instruction is required")]
    MissingInstruction,
}

/// Ordered gems plus the active selection. Never empty.
#[derive(Debug, Clone)]
pub struct GemRegistry {
    gems: Vec<NeuralGem>,
    active_id: String,
}

impl Default for GemRegistry {
    fn default() -> Self {
        Self {
            gems: preset_gems(),
            active_id: DEFAULT_GEM_ID.to_string(),
        }
    }
}

impl GemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gems(&self) -> &[NeuralGem] {
        &self.gems
    }

    /// The active gem. Falls back to the first gem if the id is stale.
    pub fn active(&self) -> &NeuralGem {
        self.gems
            .iter()
            .find(|g| g.id == self.active_id)
            .unwrap_or(&self.gems[0])
    }

    pub fn active_index(&self) -> usize {
        self.gems
            .iter()
            .position(|g| g.id == self.active_id)
            .unwrap_or(0)
    }

    pub fn get(&self, id: &str) -> Option<&NeuralGem> {
        self.gems.iter().find(|g| g.id == id)
    }

    /// Returns true if the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.active_id == id || self.get(id).is_none() {
            return false;
        }
        self.active_id = id.to_string();
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        match self.gems.get(index).map(|g| g.id.clone()) {
            Some(id) => self.select(&id),
            None => false,
        }
    }

    /// Add a custom gem and select it.
    ///
    /// Both fields are required. The name is trimmed; the instruction is
    /// kept as typed.
    pub fn create_custom(&mut self, name: &str, instruction: &str) -> Result<&NeuralGem, GemError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GemError::MissingName);
        }
        if instruction.trim().is_empty() {
            return Err(GemError::MissingInstruction);
        }

        let mut id = format!("gem_{}", Utc::now().timestamp_millis());
        // Two gems created within one millisecond.
        while self.get(&id).is_some() {
            id.push('_');
        }

        info!(%id, name, "custom gem created");
        self.gems.push(NeuralGem {
            id: id.clone(),
            name: name.to_string(),
            description: CUSTOM_GEM_DESCRIPTION.to_string(),
            system_instruction: instruction.to_string(),
            color: Color::White,
        });
        self.active_id = id;
        Ok(self.active())
    }
}
