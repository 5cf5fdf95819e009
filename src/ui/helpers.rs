//! Helper functions and constants for UI rendering
//!
//! Text wrapping is done here rather than by `Paragraph::wrap` so scroll
//! offsets can be computed from exact line counts.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for in-flight requests
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Center a `width` x `height` rect inside `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Truncate to `max_width` display columns, ending with an ellipsis if cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Split one line into chunks of at most `width` columns.
fn chunk_line(line: &str, width: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(c);
        used += w;
    }
    chunks.push(current);
    chunks
}

/// Character wrap. Keeps every space, so indentation survives.
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    text.split('\n')
        .flat_map(|line| chunk_line(line.trim_end_matches('\r'), width))
        .collect()
}

/// Word wrap for prose. Words wider than `width` are split.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut used = 0;

        for word in raw.trim_end_matches('\r').split(' ') {
            let w = word.width();
            let sep = usize::from(!line.is_empty());
            if used + sep + w <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                used += sep + w;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let mut chunks = chunk_line(word, width);
            let last = chunks.pop().unwrap_or_default();
            out.extend(chunks);
            used = last.width();
            line = last;
        }
        out.push(line);
    }
    out
}

/// The slice of an input's text that fits in `width` columns with the
/// cursor visible, plus the cursor's column within that slice.
pub fn input_window(text: &str, cursor_col: usize, width: usize) -> (String, u16) {
    let width = width.max(1);
    let offset = cursor_col.saturating_sub(width - 1);

    let mut skipped = 0;
    let mut visible = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if skipped < offset {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        visible.push(c);
        used += w;
    }
    (visible, cursor_col.saturating_sub(skipped) as u16)
}
