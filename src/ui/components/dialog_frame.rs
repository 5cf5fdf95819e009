//! Dialog Frame Component
//!
//! Centered modal box used by the prompts. The box clears what is beneath it,
//! carries its title in the top border and an optional note in the bottom
//! border, and returns the area left for content.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

/// Share of the terminal width a dialog takes on wide and narrow screens.
const WIDE_PERCENT: u16 = 50;
const NARROW_PERCENT: u16 = 80;

#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Rows available to content, borders excluded
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
    /// Right-aligned note in the bottom border
    pub footer: Option<&'a str>,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 70,
            footer: None,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    pub fn footer(mut self, note: &'a str) -> Self {
        self.footer = Some(note);
        self
    }

    /// Outer width for an area `available` columns wide.
    fn outer_width(&self, ctx: &LayoutContext, available: u16) -> u16 {
        let width = if ctx.is_extra_small() {
            // Keep a two-column margin on each side
            available.saturating_sub(4).min(self.max_width)
        } else {
            let percent = if ctx.is_narrow() {
                NARROW_PERCENT
            } else {
                WIDE_PERCENT
            };
            ctx.bounded_width(percent, self.min_width, self.max_width)
        };
        width.min(available)
    }

    /// Outer rectangle, centered in `area`.
    fn placement(&self, ctx: &LayoutContext, area: Rect) -> Rect {
        let width = self.outer_width(ctx, area.width);
        let height = self.content_height.saturating_add(2).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

/// Draw the frame and return its inner area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let outer = config.placement(ctx, area);
    frame.render_widget(Clear, outer);

    let title = Line::from(Span::styled(
        format!("[ {} ]", config.title),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    let mut block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title_top(title);
    if let Some(note) = config.footer {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", note),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );
    }

    let inner = block.inner(outer);
    frame.render_widget(block, outer);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_builder() {
        let config = DialogFrameConfig::new("Test", 10)
            .min_width(40)
            .max_width(50)
            .footer("esc");
        assert_eq!(config.content_height, 10);
        assert_eq!(config.min_width, 40);
        assert_eq!(config.max_width, 50);
        assert_eq!(config.footer, Some("esc"));
    }

    #[test]
    fn test_width_follows_breakpoints() {
        let config = DialogFrameConfig::new("Test", 10);
        // 50% of 120 = 60, within [30, 70]
        assert_eq!(config.outer_width(&LayoutContext::new(120, 40), 120), 60);
        // Capped by max_width
        assert_eq!(config.outer_width(&LayoutContext::new(200, 50), 200), 70);
        assert_eq!(config.outer_width(&LayoutContext::new(40, 14), 40), 36);
    }

    #[test]
    fn test_placement_is_centered_and_clamped() {
        let ctx = LayoutContext::new(80, 24);
        let rect = DialogFrameConfig::new("Test", 4).placement(&ctx, Rect::new(0, 0, 80, 24));
        assert_eq!(rect, Rect::new(20, 9, 40, 6));

        let tall = DialogFrameConfig::new("Test", 100).placement(&ctx, Rect::new(0, 0, 80, 24));
        assert_eq!(tall.height, 24);
        assert_eq!(tall.y, 0);
    }

    #[test]
    fn test_render_returns_inner_area_and_draws_titles() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::new(80, 24);
                let config = DialogFrameConfig::new("OPEN", 4).footer("esc");
                inner = render_dialog_frame(f, f.area(), &ctx, &config);
            })
            .unwrap();

        assert_eq!(inner, Rect::new(21, 10, 38, 4));
        let text = buffer_text(&terminal);
        assert!(text.contains("[ OPEN ]"));
        assert!(text.contains(" esc "));
    }
}
