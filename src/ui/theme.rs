//! Color theme constants for the Atharva UI.
//!
//! An amber-on-dark palette echoing the product identity.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for markers and highlights - amber
pub const COLOR_ACCENT: Color = Color::Rgb(245, 158, 11);

/// Header/logo color - pale amber
pub const COLOR_HEADER: Color = Color::Rgb(254, 243, 199);

/// Gold for hymn titles and the daily verse frame
pub const COLOR_GOLD: Color = Color::Rgb(217, 119, 6);

/// Body text
pub const COLOR_TEXT: Color = Color::Rgb(212, 212, 212);

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error banner color
pub const COLOR_ERROR: Color = Color::Red;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);
