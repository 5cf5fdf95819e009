//! Universal Converter: file library, tab selector and rendered output.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::components::{render_tab_selector, TabItem};
use super::helpers::{hard_wrap, spinner_frame, truncate_string};
use super::layout::LayoutContext;
use super::theme::{
    tab_color, tab_content_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER,
    COLOR_TAB_SMART, COLOR_TEXT,
};
use crate::app::App;
use crate::encoding::format_bytes;
use crate::library::FileRecord;
use crate::models::TabOption;

pub const LIBRARY_TITLE: &str = "PROJECT LIBRARY";
pub const LIBRARY_EMPTY: &str = "NO DATA";
pub const AWAITING_TITLE: &str = "AWAITING DATA";
pub const AWAITING_TEXT: &str = "Select a file to view analysis";
pub const NO_CONTENT: &str = "NO DATA LOADED. PLEASE UPLOAD A FILE.";
pub const ANALYZING: &str = "ANALYZING NEURAL PATHWAYS...";
pub const SMART_LOADING_TITLE: &str = "GEMINI AI PROCESSING";
pub const SMART_LOADING_TEXT: &str = "Generating contextual Python logic...";

/// Toolbar caption for the active tab.
pub fn toolbar_caption(tab: TabOption, loading: bool) -> String {
    if tab == TabOption::PythonSmart && loading {
        ANALYZING.to_string()
    } else {
        format!("RENDER: {}", tab.filename())
    }
}

pub fn render_converter(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let (library_area, main_area) = if ctx.should_stack_panels() {
        let rows = (app.library.len() as u16 + 3).clamp(4, 7);
        let [top, bottom] =
            Layout::vertical([Constraint::Length(rows), Constraint::Min(0)]).areas(area);
        (top, bottom)
    } else {
        let width = ctx.side_panel_width().max(24);
        let [left, right] =
            Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);
        (left, right)
    };

    render_library(frame, library_area, app, ctx);

    let loading = app.is_active_script_loading();
    match app.library.active() {
        Some(record) => {
            let record = record.clone();
            render_workspace(frame, main_area, app, &record, loading, ctx);
        }
        None => render_awaiting(frame, main_area),
    }
}

fn render_library(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let count = format!(" {} FILES ", app.library.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", LIBRARY_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .title(Line::from(Span::styled(count, Style::default().fg(COLOR_DIM))).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.library.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(LIBRARY_EMPTY, Style::default().fg(COLOR_DIM))),
            Line::from(Span::styled("[o] open file", Style::default().fg(COLOR_DIM))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return;
    }

    let max = (inner.width as usize).saturating_sub(4).min(ctx.max_title_length());
    let active = app.library.active_index();
    let rows_per_file = if ctx.should_stack_panels() { 1 } else { 2 };
    let mut lines = Vec::new();
    for (index, record) in app.library.files().iter().enumerate() {
        let selected = Some(index) == active;
        let style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { "▶ " } else { "  " }, style),
            Span::styled(truncate_string(&record.name, max), style),
        ]));
        if rows_per_file == 2 {
            lines.push(Line::from(Span::styled(
                format!("  {} · {}", format_bytes(record.size), record.mime_type),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    // Keep the active file in view.
    let visible = inner.height as usize;
    let active_row = active.unwrap_or(0) * rows_per_file;
    let top = (active_row + rows_per_file).saturating_sub(visible) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((top, 0)), inner);
}

fn render_awaiting(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            AWAITING_TITLE,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(AWAITING_TEXT, Style::default().fg(COLOR_DIM))),
        Line::from(""),
        Line::from(Span::styled(
            "Press o to open a file, or paste / drop a path",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let y = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
    let centered = Rect::new(area.x, y, area.width, area.height.min(lines.len() as u16));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

fn render_workspace(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    record: &FileRecord,
    loading: bool,
    ctx: &LayoutContext,
) {
    let [tabs_area, toolbar_area, content_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    let items: Vec<TabItem> = TabOption::ALL
        .iter()
        .map(|tab| TabItem::new(tab.label()).with_accent(tab_color(*tab)))
        .collect();
    frame.render_widget(
        Paragraph::new(vec![
            render_tab_selector(&items, app.active_tab.index(), true, ctx),
            Line::from(""),
        ]),
        tabs_area,
    );

    let tab = app.active_tab;
    let caption = toolbar_caption(tab, loading);
    let caption_color = if caption == ANALYZING {
        COLOR_TAB_SMART
    } else {
        COLOR_DIM
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {}", caption), Style::default().fg(caption_color)),
        ])),
        toolbar_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled("[c] COPY  [s] SAVE ", Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Right),
        toolbar_area,
    );

    let color = tab_color(tab);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", record.name),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);

    if tab == TabOption::PythonSmart && loading {
        render_smart_loading(frame, inner, app.tick_count);
        return;
    }

    let content = record.tab_content(tab);
    if content.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(NO_CONTENT, Style::default().fg(COLOR_DIM)))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let rows = hard_wrap(&content, inner.width as usize);
    let max_scroll = (rows.len() as u16).saturating_sub(inner.height);
    app.content_scroll = app.content_scroll.min(max_scroll);

    let style = Style::default().fg(tab_content_color(tab));
    let lines: Vec<Line> = rows
        .into_iter()
        .map(|row| Line::from(Span::styled(row, style)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).scroll((app.content_scroll, 0)),
        inner,
    );
}

fn render_smart_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let lines = vec![
        Line::from(Span::styled(
            spinner_frame(tick),
            Style::default().fg(COLOR_TAB_SMART),
        )),
        Line::from(Span::styled(
            SMART_LOADING_TITLE,
            Style::default()
                .fg(COLOR_TAB_SMART)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SMART_LOADING_TEXT, Style::default().fg(COLOR_DIM))),
    ];
    let y = area.y + area.height.saturating_sub(3) / 2;
    let centered = Rect::new(area.x, y, area.width, area.height.min(3));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolbar_caption() {
        assert_eq!(toolbar_caption(TabOption::CArray, true), "RENDER: data.c");
        assert_eq!(toolbar_caption(TabOption::PythonSmart, false), "RENDER: smart_loader.py");
        assert_eq!(toolbar_caption(TabOption::PythonSmart, true), ANALYZING);
    }
}
