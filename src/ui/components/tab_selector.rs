//! Tab Selector Component
//!
//! A horizontal tab selector with a `▶` marker for the active tab.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Label displayed in the tab bar
    pub label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Create a new tab item
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

/// Render a horizontal tab selector line.
///
/// The selected tab carries the `▶` marker and the header color; the rest
/// are dimmed. Tab spacing tightens on extra-small terminals.
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    spans.push(Span::raw("  "));

    for (idx, item) in items.iter().enumerate() {
        if idx == selected {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ".to_string(), Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(
                item.label.to_string(),
                Style::default().fg(COLOR_DIM),
            ));
        }

        if idx < items.len() - 1 {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<TabItem<'static>> {
        vec![TabItem::new("ORACLE"), TabItem::new("LIBRARY")]
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_marker_on_first_tab() {
        let ctx = LayoutContext::new(100, 40);
        let line = render_tab_selector(&items(), 0, &ctx);
        let text = line_text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker < text.find("ORACLE").unwrap());
    }

    #[test]
    fn test_marker_on_second_tab() {
        let ctx = LayoutContext::new(100, 40);
        let line = render_tab_selector(&items(), 1, &ctx);
        let text = line_text(&line);
        let marker = text.find('▶').unwrap();
        assert!(marker > text.find("ORACLE").unwrap());
        assert!(marker < text.find("LIBRARY").unwrap());
    }

    #[test]
    fn test_both_labels_always_present() {
        let ctx = LayoutContext::new(50, 14);
        let text = line_text(&render_tab_selector(&items(), 0, &ctx));
        assert!(text.contains("ORACLE"));
        assert!(text.contains("LIBRARY"));
    }
}
