//! Status Indicator Component
//!
//! Spinner, info, and error lines used for fetch progress and the
//! transport-error banner.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// The spinner glyph for an animation frame counter.
pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicator {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Dim informational message
    Info { message: String },
    /// Error header with optional details
    Error {
        header: String,
        details: Option<String>,
    },
}

impl StatusIndicator {
    /// Create a new spinner indicator
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    /// Create a new info indicator
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    /// Create a new error indicator
    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }

    /// Render to text lines.
    pub fn lines(&self) -> Vec<Line<'static>> {
        match self {
            StatusIndicator::Spinner { message, frame } => {
                vec![Line::from(vec![
                    Span::styled(
                        format!("{} ", spinner_char(*frame)),
                        Style::default().fg(COLOR_DIM),
                    ),
                    Span::styled(message.clone(), Style::default().fg(COLOR_DIM)),
                ])]
            }
            StatusIndicator::Info { message } => {
                vec![Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(COLOR_DIM),
                ))]
            }
            StatusIndicator::Error { header, details } => {
                let mut lines = vec![Line::from(vec![
                    Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
                    Span::styled(
                        header.clone(),
                        Style::default()
                            .fg(COLOR_ERROR)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])];
                if let Some(details) = details {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", details),
                        Style::default().fg(COLOR_DIM),
                    )));
                }
                lines
            }
        }
    }
}
