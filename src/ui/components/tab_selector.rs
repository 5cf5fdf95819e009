//! Tab Selector Component
//!
//! A horizontal tab selector. Uses the `▶` marker for the selected item,
//! tints it with the item's accent color, and switches to short labels on
//! compact terminals.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
    /// Color of the marker and label when selected
    pub accent: Color,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
            accent: COLOR_ACCENT,
        }
    }

    pub fn with_short_label(mut self, short_label: &'a str) -> Self {
        self.short_label = short_label;
        self
    }

    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

/// Render a horizontal tab selector
///
/// # Example
/// ```ignore
/// let items = vec![
///     TabItem::new("Binary").with_accent(COLOR_TAB_BINARY),
///     TabItem::new("AI Smart").with_short_label("AI"),
/// ];
/// let line = render_tab_selector(&items, 0, true, &ctx);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            let style = if focused {
                Style::default().fg(item.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(item.accent)
            };
            spans.push(Span::styled("▶ ".to_string(), style));
            spans.push(Span::styled(label.to_string(), style));
        } else {
            let style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), style));
            spans.push(Span::styled(label.to_string(), style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { " " } else { "   " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_items() -> Vec<TabItem<'static>> {
        vec![
            TabItem::new("Binary").with_accent(Color::Cyan),
            TabItem::new("AI Smart").with_short_label("AI"),
        ]
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_tab_item_builder() {
        let item = TabItem::new("C/C++").with_short_label("C").with_accent(Color::Yellow);
        assert_eq!(item.label, "C/C++");
        assert_eq!(item.short_label, "C");
        assert_eq!(item.accent, Color::Yellow);
    }

    #[test]
    fn test_marker_precedes_selected_label() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let text = text_of(&render_tab_selector(&items, 1, true, &ctx));

        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("Binary").unwrap());
        assert!(marker < text.find("AI Smart").unwrap());
    }

    #[test]
    fn test_selected_uses_accent() {
        let items = create_test_items();
        let ctx = LayoutContext::new(100, 40);
        let line = render_tab_selector(&items, 0, true, &ctx);
        let marker = line.spans.iter().find(|s| s.content == "▶ ").unwrap();
        assert_eq!(marker.style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let items = create_test_items();
        let ctx = LayoutContext::new(50, 14);
        let text = text_of(&render_tab_selector(&items, 0, true, &ctx));
        assert!(text.contains("AI"));
        assert!(!text.contains("AI Smart"));
    }
}
