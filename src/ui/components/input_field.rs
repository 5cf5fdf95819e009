//! Input Field Component
//!
//! Single-line text input with an optional label, placeholder, and a real
//! terminal cursor when focused. Long values scroll horizontally to keep the
//! cursor visible.

use ratatui::{
    layout::{Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::TextInput;
use crate::ui::helpers::input_window;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: Option<&'a str>,
    pub input: &'a TextInput,
    pub focused: bool,
    /// Shown dimmed while the input is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            label: None,
            input,
            focused: false,
            placeholder: None,
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed: the label line (if any) plus a bordered box.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    if config.label.is_some() {
        4
    } else {
        3
    }
}

/// Render an input field and return the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;

    if let Some(label) = config.label {
        let label_style = if config.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let label_area = Rect::new(area.x, area.y, area.width, 1.min(area.height));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, label_style))),
            label_area,
        );
        y_offset += 1;
    }

    let box_area = Rect::new(
        area.x,
        area.y + y_offset,
        area.width,
        3.min(area.height.saturating_sub(y_offset)),
    );

    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));
    let inner = block.inner(box_area);

    let value = config.input.text();
    let (content, cursor_x) = if value.is_empty() {
        let placeholder = config.placeholder.unwrap_or("");
        (Span::styled(placeholder.to_string(), Style::default().fg(COLOR_DIM)), 0)
    } else {
        let (visible, cursor_x) =
            input_window(value, usize::from(config.input.cursor_column()), inner.width as usize);
        let style = if config.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        (Span::styled(visible, style), cursor_x)
    };

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), box_area);

    if config.focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(
            inner.x + cursor_x.min(inner.width - 1),
            inner.y,
        ));
    }

    y_offset + box_area.height
}
