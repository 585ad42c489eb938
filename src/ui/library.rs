//! Library tab rendering: shelf mode and reading mode.
//!
//! Shelf mode shows the search field above the filtered hymn list, with a
//! `▶` cursor and a scroll window that follows it. Reading mode shows one
//! hymn's full content with a scroll offset and a `Book N • Hymn M` footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::Hymn;
use crate::traits::HttpClient;
use crate::ui::components::{
    render_input_field, InputFieldConfig, StatusIndicator, INPUT_FIELD_HEIGHT,
};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_GOLD, COLOR_HEADER, COLOR_TEXT};

/// Widest the reading column gets on large terminals.
const READING_COLUMN_WIDTH: u16 = 84;

/// Rows per shelf item: identifier line, title line, spacing.
const LINES_PER_ITEM: usize = 3;

/// Render the library tab.
pub fn render_library<C: HttpClient + 'static>(
    frame: &mut Frame,
    area: Rect,
    app: &App<C>,
    ctx: &LayoutContext,
) {
    match &app.view.selected_hymn {
        Some(hymn) => render_reading(frame, area, hymn, app.view.reading_scroll, ctx),
        None => render_shelf(frame, area, app),
    }
}

fn render_shelf<C: HttpClient + 'static>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(INPUT_FIELD_HEIGHT), Constraint::Min(0)])
        .split(area);

    let search = InputFieldConfig::new("Search the ancient texts", &app.view.library_search)
        .focused(true)
        .placeholder("Type to filter by title...");
    render_input_field(frame, chunks[0], &search);

    let list_area = Rect {
        x: chunks[1].x + 2,
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(4),
        height: chunks[1].height,
    };

    if !app.library.is_loaded() {
        let indicator = StatusIndicator::info("Gathering the scrolls...");
        frame.render_widget(Paragraph::new(indicator.lines()), list_area);
        return;
    }

    let filtered = app.library.filtered_view(&app.view.library_search);
    if filtered.is_empty() {
        let indicator = StatusIndicator::info("No hymns match this search.");
        frame.render_widget(Paragraph::new(indicator.lines()), list_area);
        return;
    }

    let visible_items = (list_area.height as usize / LINES_PER_ITEM).max(1);
    let cursor = app.view.shelf_cursor.min(filtered.len() - 1);
    let offset = scroll_offset(cursor, filtered.len(), visible_items);

    let mut lines: Vec<Line> = Vec::new();
    let max_title_width = list_area.width.saturating_sub(2) as usize;

    for (idx, hymn) in filtered
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_items)
    {
        let is_cursor = idx == cursor;

        let marker = if is_cursor {
            Span::styled("▶ ", Style::default().fg(COLOR_ACCENT))
        } else {
            Span::raw("  ")
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(
                format!("BK {} • HY {}", hymn.book, hymn.hymn),
                Style::default().fg(COLOR_DIM),
            ),
        ]));

        let title_style = if is_cursor {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate_to_width(&hymn.title, max_title_width), title_style),
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), list_area);
}

fn render_reading(frame: &mut Frame, area: Rect, hymn: &Hymn, scroll: u16, ctx: &LayoutContext) {
    let column = ctx.centered_column(area, READING_COLUMN_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(column);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "← ESC TO RETURN",
            Style::default().fg(COLOR_ACCENT),
        ))),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hymn.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let separator = "─".repeat(column.width.saturating_sub(4) as usize);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(COLOR_GOLD),
        )))
        .alignment(Alignment::Center),
        chunks[3],
    );

    let content = Paragraph::new(hymn.content.clone())
        .style(Style::default().fg(COLOR_TEXT))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(content, chunks[4]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Book {} • Hymn {}", hymn.book, hymn.hymn),
            Style::default().fg(COLOR_DIM),
        )))
        .alignment(Alignment::Center),
        chunks[5],
    );
}

/// First visible item index for a scroll window following the cursor.
fn scroll_offset(cursor: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    let max_offset = total - visible;
    cursor.saturating_sub(visible / 2).min(max_offset)
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
