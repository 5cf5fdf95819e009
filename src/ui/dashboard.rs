//! Dashboard: welcome banner, system stat cards and module launch cards.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_ONLINE, COLOR_TEXT};
use crate::app::App;
use crate::models::AppModule;

pub const WELCOME_TITLE: &str = "WELCOME, OPERATOR";
pub const WELCOME_TEXT: &str = "ROG Omni-Tool Suite is online. Neural pathways connected. Select a module to begin operations.";

/// (label, value) pairs on the stat row.
pub const STAT_CARDS: [(&str, &str); 4] = [
    ("SYSTEM STATUS", "ONLINE"),
    ("AI LATENCY", "12ms"),
    ("MEMORY", "OPTIMAL"),
    ("MODULES", "2 ACTIVE"),
];

/// Title, description and call to action of a module's launch card.
pub fn card_copy(module: AppModule) -> (&'static str, &'static str, &'static str) {
    match module {
        AppModule::NeuralNexus => (
            "NEURAL NEXUS",
            "Advanced AI Chat interface with custom \"Gems\" (Personas). Configure system instructions for specialized tasks like coding, security analysis, or creative writing.",
            "ENTER NEXUS",
        ),
        AppModule::Converter => (
            "UNI CONVERTER",
            "Universal file analysis tool. Convert any binary input into Hex, Python Bytes, C Arrays, or Base64. Includes AI-powered script generation.",
            "OPEN TOOL",
        ),
        AppModule::Dashboard => ("DASHBOARD", "", "HOME"),
    }
}

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let stats_height = if ctx.is_compact() { 0 } else { 4 };
    let [banner_area, stats_area, cards_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(stats_height),
        Constraint::Min(0),
    ])
    .areas(area.inner(ratatui::layout::Margin::new(1, 0)));

    render_banner(frame, banner_area);
    if stats_height > 0 {
        render_stats(frame, stats_area);
    }
    render_cards(frame, cards_area, app, ctx);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            WELCOME_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(WELCOME_TEXT, Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((label, value), column) in STAT_CARDS.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER));
        let value_color = if *value == "ONLINE" {
            COLOR_ONLINE
        } else {
            COLOR_HEADER
        };
        let lines = vec![
            Line::from(Span::styled(*label, Style::default().fg(COLOR_DIM))),
            Line::from(Span::styled(
                *value,
                Style::default().fg(value_color).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let areas = if ctx.should_stack_panels() {
        Layout::vertical([Constraint::Ratio(1, 2); 2]).split(area)
    } else {
        Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(area)
    };

    for (index, (module, card_area)) in AppModule::CARDS.iter().zip(areas.iter()).enumerate() {
        let selected = index == app.dashboard_index;
        let (title, description, action) = card_copy(*module);

        let border = if selected { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ));

        let action_style = if selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let marker = if selected { "▶ " } else { "  " };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(description, Style::default().fg(COLOR_TEXT))),
            Line::from(""),
            Line::from(vec![
                Span::styled(marker, action_style),
                Span::styled(format!("[ {} ]", action), action_style),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            *card_area,
        );
    }
}
