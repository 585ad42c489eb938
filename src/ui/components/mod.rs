//! Reusable UI components.

mod input_field;
mod status_indicator;
mod tab_selector;

pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use status_indicator::{spinner_char, StatusIndicator};
pub use tab_selector::{render_tab_selector, TabItem};
