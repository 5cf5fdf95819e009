//! UI rendering for omnitool
//!
//! Layout:
//! - Header with the suite title and model
//! - Left sidebar: module navigation and API status
//! - Main panel: dashboard, Neural Nexus, or Universal Converter
//! - Footer: status message or key hints
//! - Prompt overlay (open file / create gem) when one is open
//!
//! Every render function receives a [`LayoutContext`] built from the frame
//! size and makes its responsive decisions from it.

mod chrome;
mod components;
mod converter;
mod dashboard;
mod helpers;
mod layout;
mod nexus;
mod prompt;
mod theme;

pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use theme::{tab_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;
use crate::models::AppModule;
use chrome::{render_footer, render_header, render_sidebar};
use converter::render_converter;
use dashboard::render_dashboard;
use nexus::render_nexus;
use prompt::render_prompt;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current module.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(ctx.header_height()),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app, &ctx);

    let [sidebar_area, main_area] = Layout::horizontal([
        Constraint::Length(ctx.sidebar_width()),
        Constraint::Min(0),
    ])
    .areas(body_area);
    if sidebar_area.width > 0 {
        render_sidebar(frame, sidebar_area, app);
    }

    match app.module {
        AppModule::Dashboard => render_dashboard(frame, main_area, app, &ctx),
        AppModule::NeuralNexus => render_nexus(frame, main_area, app, &ctx),
        AppModule::Converter => render_converter(frame, main_area, app, &ctx),
    }

    render_footer(frame, footer_area, app);
    render_prompt(frame, app, &ctx);
}
