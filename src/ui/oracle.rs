//! Oracle tab rendering.
//!
//! Layout, top to bottom: the daily-verse card (idle state only), the query
//! input with its busy glyph, then whichever result panel the session's
//! display precedence selects — silence, ranked matches, or the error
//! banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{DailyVerse, SolutionMatch};
use crate::state::OraclePanel;
use crate::traits::HttpClient;
use crate::ui::components::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_GOLD, COLOR_HEADER, COLOR_TEXT,
};

/// Widest the oracle column gets on large terminals.
const ORACLE_COLUMN_WIDTH: u16 = 84;

/// Rows for the daily-verse card, borders included.
const DAILY_CARD_HEIGHT: u16 = 6;

/// Rows for the silence panel, borders included.
const SILENCE_PANEL_HEIGHT: u16 = 6;

/// Secondary hint shown under the silence message.
const SILENCE_HINT: &str = "Try simplifying your query or focus on the core emotion.";

/// Render the oracle tab.
pub fn render_oracle<C: HttpClient + 'static>(
    frame: &mut Frame,
    area: Rect,
    app: &App<C>,
    ctx: &LayoutContext,
) {
    let column = ctx.centered_column(area, ORACLE_COLUMN_WIDTH);
    let panel = app.oracle.panel(&app.daily_verse);

    let daily_height = match panel {
        OraclePanel::DailyVerse(_) => DAILY_CARD_HEIGHT,
        _ => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(daily_height),
            Constraint::Length(INPUT_FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(column);

    if let OraclePanel::DailyVerse(verse) = panel {
        render_daily_card(frame, chunks[0], verse);
    }

    let input = InputFieldConfig::new("Ask the oracle", &app.oracle.query)
        .focused(true)
        .placeholder("Pour your troubles here (e.g., 'How to find peace?')...")
        .busy(app.oracle.is_loading(), app.spinner_frame);
    render_input_field(frame, chunks[1], &input);

    match panel {
        OraclePanel::Silence(message) => render_silence_panel(frame, chunks[3], message),
        OraclePanel::Matches(matches) => render_matches(frame, chunks[3], matches),
        OraclePanel::Error(message) => render_error_banner(frame, chunks[3], message),
        OraclePanel::DailyVerse(_) | OraclePanel::Empty => {}
    }
}

fn render_daily_card(frame: &mut Frame, area: Rect, verse: &DailyVerse) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_GOLD))
        .title(Span::styled(
            " ☀ HYMN OF THE MOMENT ",
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let lines = vec![
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", verse.verse),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("{} • {}", verse.title, verse.source),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(card, area);
}

fn render_silence_panel(frame: &mut Frame, area: Rect, message: &str) {
    let panel_area = Rect {
        height: area.height.min(SILENCE_PANEL_HEIGHT),
        ..area
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_TEXT),
        )),
        Line::from(Span::styled(SILENCE_HINT, Style::default().fg(COLOR_DIM))),
    ];

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, panel_area);
}

fn render_matches(frame: &mut Frame, area: Rect, matches: &[SolutionMatch]) {
    let mut lines: Vec<Line> = Vec::new();

    for item in matches {
        lines.push(Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", item.verse),
            Style::default()
                .fg(COLOR_TEXT)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                item.source.to_uppercase(),
                Style::default().fg(COLOR_DIM),
            ),
            Span::styled(
                format!("   Match: {}", item.score_percent()),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
        lines.push(Line::default());
    }

    let list = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(list, area);
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(vec![
            Span::styled("✗ ", Style::default().fg(COLOR_ERROR)),
            Span::styled(
                message.to_string(),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "  Press Enter to ask again.",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let banner = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(banner, area);
}
