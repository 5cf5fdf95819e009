//! Color theme constants for the omnitool UI
//!
//! Black background, ROG red accents, one signal color per converter tab.

use ratatui::style::Color;

use crate::models::TabOption;

// ============================================================================
// Base Palette
// ============================================================================

/// Brand red used for the logo, active navigation and focused borders
pub const COLOR_ACCENT: Color = Color::Rgb(0xff, 0x00, 0x33);

/// Panel borders
pub const COLOR_BORDER: Color = Color::Rgb(0x3a, 0x3a, 0x3a);

/// Header and emphasized text
pub const COLOR_HEADER: Color = Color::White;

/// Body text
pub const COLOR_TEXT: Color = Color::Gray;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Healthy / online indicators
pub const COLOR_ONLINE: Color = Color::Rgb(0x00, 0xff, 0x66);

/// Error status line
pub const COLOR_ERROR: Color = Color::Rgb(0xff, 0x44, 0x44);

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 10, 14);

// ============================================================================
// Converter Tab Colors
// ============================================================================

pub const COLOR_TAB_BINARY: Color = Color::Rgb(0x00, 0xcc, 0xff);
pub const COLOR_TAB_C_ARRAY: Color = Color::Rgb(0xff, 0xcc, 0x00);
pub const COLOR_TAB_PY_RAW: Color = Color::Rgb(0xff, 0x00, 0x33);
pub const COLOR_TAB_BASE64: Color = Color::Rgb(0x00, 0xff, 0x66);
pub const COLOR_TAB_SMART: Color = Color::Rgb(0x9d, 0x00, 0xff);

/// Text color for generated loader scripts
pub const COLOR_SMART_CONTENT: Color = Color::Rgb(0xaa, 0xdd, 0xff);

/// Signal color of a converter tab.
pub fn tab_color(tab: TabOption) -> Color {
    match tab {
        TabOption::Binary => COLOR_TAB_BINARY,
        TabOption::CArray => COLOR_TAB_C_ARRAY,
        TabOption::PythonRaw => COLOR_TAB_PY_RAW,
        TabOption::Base64 => COLOR_TAB_BASE64,
        TabOption::PythonSmart => COLOR_TAB_SMART,
    }
}

/// Text color for a tab's content.
pub fn tab_content_color(tab: TabOption) -> Color {
    match tab {
        TabOption::PythonSmart => COLOR_SMART_CONTENT,
        other => tab_color(other),
    }
}
