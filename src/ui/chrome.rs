//! Frame around every module: title bar, module sidebar, and footer.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_ONLINE, COLOR_TEXT,
};
use crate::app::{App, StatusKind};
use crate::input::ModalType;
use crate::models::AppModule;

pub const APP_TITLE: &str = "ROG OMNI-TOOL SUITE";

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let title = Line::from(vec![
        Span::styled(" ◆ ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let model = Line::from(Span::styled(
        format!("{} ", app.config.model.to_uppercase()),
        Style::default().fg(COLOR_DIM),
    ))
    .alignment(Alignment::Right);

    if ctx.header_height() == 1 {
        frame.render_widget(Paragraph::new(title), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, 1);
    frame.render_widget(Paragraph::new(title), row);
    if !ctx.is_narrow() {
        frame.render_widget(Paragraph::new(model), row);
    }
}

/// Text and color of the API status line.
pub fn api_status(app: &App) -> (&'static str, ratatui::style::Color) {
    if app.ai_enabled() {
        ("GEMINI API: ACTIVE", COLOR_ONLINE)
    } else {
        ("GEMINI API: OFFLINE", COLOR_ERROR)
    }
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [nav_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            " MODULES",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for module in AppModule::ALL {
        let active = module == app.module;
        let (marker, style) = if active {
            (
                "▶ ",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(COLOR_TEXT))
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", marker), style),
            Span::styled(module.label(), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    F{}", module.index() + 1),
            Style::default().fg(COLOR_DIM),
        )));
    }
    frame.render_widget(Paragraph::new(lines), nav_area);

    let (text, color) = api_status(app);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(color)),
                Span::styled(text, Style::default().fg(COLOR_DIM)),
            ]),
        ]),
        status_area,
    );
}

/// Key hints for the current module and prompt.
pub fn keybind_hints(app: &App) -> &'static str {
    match app.build_input_context().modal {
        ModalType::OpenFile => "Enter load · Esc cancel",
        ModalType::CreateGem => "Tab switch field · Enter next/create · Esc cancel",
        ModalType::None => match app.module {
            AppModule::Dashboard => "←/→ select · Enter open · 1-3 modules · q quit",
            AppModule::NeuralNexus => {
                "Enter send · Tab/Shift+Tab gem · Ctrl+N new gem · PgUp/PgDn scroll · Esc back"
            }
            AppModule::Converter => {
                "o open · ↑/↓ file · ←/→ tab · c copy · s save · d remove · Esc back"
            }
        },
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => COLOR_ONLINE,
                StatusKind::Error => COLOR_ERROR,
            };
            Line::from(Span::styled(format!(" {}", status.text), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            format!(" {}", keybind_hints(app)),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
