//! Modal prompt overlays (open file, create gem).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field, DialogFrameConfig,
    InputFieldConfig,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::app::{App, GemField, Prompt};

pub const OPEN_FILE_TITLE: &str = "OPEN FILE";
pub const CREATE_GEM_TITLE: &str = "CREATE NEW GEM";
pub const CREATE_GEM_BUTTON: &str = "INITIALIZE GEM";
const OPEN_FILE_NOTE: &str = "~ expands to home";
const CREATE_GEM_NOTE: &str = "Tab switches field";

pub fn render_prompt(frame: &mut Frame, app: &App, ctx: &LayoutContext) {
    let Some(prompt) = &app.prompt else {
        return;
    };
    let area = frame.area();

    match prompt {
        Prompt::OpenFile { input } => {
            let field = InputFieldConfig::new(input)
                .label("Path")
                .focused(true)
                .placeholder("/path/to/file");
            let height = calculate_input_field_height(&field);
            let inner = render_dialog_frame(
                frame,
                area,
                ctx,
                &DialogFrameConfig::new(OPEN_FILE_TITLE, height).footer(OPEN_FILE_NOTE),
            );
            render_input_field(frame, pad(inner), &field);
        }
        Prompt::CreateGem {
            name,
            instruction,
            field,
        } => {
            let name_field = InputFieldConfig::new(name)
                .label("Name")
                .focused(*field == GemField::Name)
                .placeholder("Gem Name");
            let instruction_field = InputFieldConfig::new(instruction)
                .label("Instructions")
                .focused(*field == GemField::Instruction)
                .placeholder("System Instructions (Persona)");
            let height = calculate_input_field_height(&name_field)
                + calculate_input_field_height(&instruction_field)
                + 3;
            let inner = render_dialog_frame(
                frame,
                area,
                ctx,
                &DialogFrameConfig::new(CREATE_GEM_TITLE, height)
                    .min_width(40)
                    .footer(CREATE_GEM_NOTE),
            );
            let inner = pad(inner);

            let mut y = render_input_field(frame, inner, &name_field);
            let rest = Rect::new(inner.x, inner.y + y, inner.width, inner.height.saturating_sub(y));
            y += render_input_field(frame, rest, &instruction_field);

            let ready = !name.is_blank() && !instruction.is_blank();
            let button_style = if ready {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            if y + 1 < inner.height {
                let row = Rect::new(inner.x, inner.y + y + 1, inner.width, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(format!("[ {} ]", CREATE_GEM_BUTTON), button_style))
                        .alignment(Alignment::Center),
                    row,
                );
            }
        }
    }
}

/// One column of horizontal padding inside the dialog.
fn pad(area: Rect) -> Rect {
    Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height)
}
