//! Reusable UI Components
//!
//! - `TabSelector` - Horizontal selector with `▶` markers
//! - `InputField` - Single-line text input with placeholder and cursor
//! - `DialogFrame` - Centered overlay with rounded borders

mod dialog_frame;
mod input_field;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use tab_selector::{render_tab_selector, TabItem};
