//! Responsive layout helpers.
//!
//! `LayoutContext` encapsulates the terminal dimensions and is passed to
//! render functions so sizing decisions stay in one place.

use ratatui::layout::Rect;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
}

/// Layout context holding terminal dimensions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Whether the terminal is narrower than the small breakpoint.
    pub fn is_compact(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Whether the terminal is narrower than the extra-small breakpoint.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Center a column of `max_width` inside `area`, full height.
    ///
    /// Narrow terminals get the whole width.
    pub fn centered_column(&self, area: Rect, max_width: u16) -> Rect {
        if area.width <= max_width {
            return area;
        }
        let x = area.x + (area.width - max_width) / 2;
        Rect {
            x,
            y: area.y,
            width: max_width,
            height: area.height,
        }
    }
}
