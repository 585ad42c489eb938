//! Input Field Component
//!
//! A single-line text input with rounded borders, placeholder text, and an
//! optional busy glyph on the trailing edge (the submit control's loading
//! indicator).

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::status_indicator::spinner_char;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG};

/// Rows consumed by an input field: label + bordered box.
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input receives keystrokes right now
    pub focused: bool,
    /// Placeholder text shown while the value is empty
    pub placeholder: Option<&'a str>,
    /// Busy state: replaces the trailing submit glyph with a spinner
    pub busy: bool,
    /// Spinner animation frame, used while busy
    pub spinner_frame: usize,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
            busy: false,
            spinner_frame: 0,
        }
    }

    /// Set whether the input is focused
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the busy state and its animation frame
    pub fn busy(mut self, busy: bool, spinner_frame: usize) -> Self {
        self.busy = busy;
        self.spinner_frame = spinner_frame;
        self
    }
}

/// Render an input field with label and bordered input box.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let label_style = if config.focused {
        Style::default().fg(COLOR_HEADER)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let input_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 3,
    };

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

    let showing_placeholder = config.value.is_empty() && config.placeholder.is_some();
    let mut content = if showing_placeholder {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        config.value.to_string()
    };

    let text_style = if showing_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(COLOR_HEADER)
    };

    if config.focused && !showing_placeholder {
        content.push('\u{2588}'); // block cursor
    }

    // Trailing glyph: spinner while busy, submit hint otherwise
    let glyph = if config.busy {
        Span::styled(
            format!(" {} ", spinner_char(config.spinner_frame)),
            Style::default().fg(COLOR_ACCENT),
        )
    } else {
        Span::styled(" ⏎ ", Style::default().fg(COLOR_DIM))
    };

    let inner_width = input_area.width.saturating_sub(2) as usize;
    let pad = inner_width
        .saturating_sub(content.chars().count())
        .saturating_sub(3);

    let line = Line::from(vec![
        Span::styled(content, text_style),
        Span::raw(" ".repeat(pad)),
        glyph,
    ]);

    frame.render_widget(Paragraph::new(line).block(block), input_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_config_new() {
        let config = InputFieldConfig::new("Label", "Value");
        assert_eq!(config.label, "Label");
        assert_eq!(config.value, "Value");
        assert!(!config.focused);
        assert!(!config.busy);
        assert!(config.placeholder.is_none());
    }

    #[test]
    fn test_input_field_config_builder() {
        let config = InputFieldConfig::new("Query", "")
            .focused(true)
            .placeholder("Pour your troubles here")
            .busy(true, 2);

        assert!(config.focused);
        assert!(config.busy);
        assert_eq!(config.spinner_frame, 2);
        assert_eq!(config.placeholder, Some("Pour your troubles here"));
    }
}
