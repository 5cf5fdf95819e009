//! Neural Nexus: gem list, transcript and message input.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::components::{render_input_field, InputFieldConfig};
use super::helpers::{spinner_frame, truncate_string, word_wrap};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};
use crate::app::App;
use crate::gems::NeuralGem;
use crate::models::{ChatMessage, ChatRole};

pub const DISCLAIMER: &str = "AI GENERATED CONTENT MAY BE INACCURATE. VERIFY IMPORTANT DATA.";
pub const TYPING_INDICATOR: &str = "COMPUTING RESPONSE...";

/// Model tag shown under the gem name, e.g. `GEMINI-3-FLASH // GEM_CODER`.
pub fn model_tag(model: &str, gem: &NeuralGem) -> String {
    format!(
        "{} // {}",
        model.trim_end_matches("-preview").to_uppercase(),
        gem.id.to_uppercase()
    )
}

pub fn render_nexus(frame: &mut Frame, area: Rect, app: &mut App, ctx: &LayoutContext) {
    let side = ctx.side_panel_width();
    let [gems_area, chat_area] =
        Layout::horizontal([Constraint::Length(side), Constraint::Min(0)]).areas(area);

    if side > 0 {
        render_gem_list(frame, gems_area, app, ctx);
    }
    render_chat(frame, chat_area, app);
}

fn render_gem_list(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max = ctx.max_title_length();
    let mut lines = vec![
        Line::from(Span::styled(
            " NEURAL GEMS",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let active = app.gems.active_index();
    for (index, gem) in app.gems.gems().iter().enumerate() {
        let selected = index == active;
        let name_style = if selected {
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(if selected { " ▶ " } else { "   " }, Style::default().fg(COLOR_ACCENT)),
            Span::styled("● ", Style::default().fg(gem.color)),
            Span::styled(truncate_string(&gem.name, max), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", truncate_string(&gem.description, max)),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " + NEW GEM (Ctrl+N)",
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_chat(frame: &mut Frame, area: Rect, app: &mut App) {
    let [header_area, transcript_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let gem = app.gems.active().clone();

    let header = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let header_inner = header.inner(header_area);
    frame.render_widget(header, header_area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(gem.color)),
                Span::styled(
                    gem.name.clone(),
                    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("   {}", model_tag(&app.config.model, &gem)),
                Style::default().fg(COLOR_DIM),
            )),
        ]),
        header_inner,
    );

    render_transcript(frame, transcript_area, app, &gem);

    let placeholder = format!("Message {}...", gem.name);
    let config = InputFieldConfig::new(&app.chat.input)
        .focused(app.prompt.is_none())
        .placeholder(&placeholder);
    render_input_field(frame, input_area, &config);

    frame.render_widget(
        Paragraph::new(Span::styled(DISCLAIMER, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Center),
        footer_area,
    );
}

/// Transcript lines wrapped to `width`.
pub fn transcript_lines(
    messages: &[ChatMessage],
    gem: &NeuralGem,
    width: u16,
) -> Vec<Line<'static>> {
    let text_width = (width as usize).saturating_sub(2).max(1);
    let mut lines = Vec::new();

    for message in messages {
        let (who, color) = match message.role {
            ChatRole::User => ("YOU".to_string(), COLOR_ACCENT),
            ChatRole::Model => (gem.name.to_uppercase(), gem_text_color(gem)),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}", who),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", message.time_label()),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        for row in word_wrap(&message.text, text_width) {
            lines.push(Line::from(Span::styled(
                format!(" {}", row),
                Style::default().fg(COLOR_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn gem_text_color(gem: &NeuralGem) -> Color {
    match gem.color {
        Color::Reset => COLOR_HEADER,
        other => other,
    }
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &mut App, gem: &NeuralGem) {
    let mut lines = transcript_lines(&app.chat.messages, gem, area.width);
    if app.chat.awaiting_reply {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", spinner_frame(app.tick_count)),
                Style::default().fg(COLOR_ACCENT),
            ),
            Span::styled(TYPING_INDICATOR, Style::default().fg(COLOR_DIM)),
        ]));
    }

    let total = lines.len() as u16;
    let max_scroll = total.saturating_sub(area.height);
    app.chat.scroll_from_bottom = app.chat.scroll_from_bottom.min(max_scroll);
    let top = max_scroll - app.chat.scroll_from_bottom;

    frame.render_widget(Paragraph::new(lines).scroll((top, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gems::preset_gems;

    #[test]
    fn test_model_tag() {
        let gem = &preset_gems()[1];
        assert_eq!(
            model_tag("gemini-3-flash-preview", gem),
            "GEMINI-3-FLASH // GEM_CODER"
        );
    }

    #[test]
    fn test_transcript_lines_wrap() {
        let gem = &preset_gems()[0];
        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage::model("one two three four five six"),
        ];
        let lines = transcript_lines(&messages, gem, 12);
        // header + 1 row + blank, header + 3 rows + blank
        assert_eq!(lines.len(), 3 + 5);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.starts_with(" YOU"));
    }
}
