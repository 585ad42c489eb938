//! Rendering for the whole TUI.
//!
//! `render` is a pure function of the app state: header, tab bar, then the
//! active tab's content.

pub mod components;
pub mod layout;
mod library;
mod oracle;
pub mod theme;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::Tab;
use crate::traits::HttpClient;
use components::{render_tab_selector, TabItem};
use layout::LayoutContext;
use theme::{COLOR_DIM, COLOR_HEADER};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render one frame.
pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_header(frame, chunks[0]);

    let tabs = [TabItem::new("ORACLE"), TabItem::new("LIBRARY")];
    let tab_line = render_tab_selector(&tabs, app.view.active_tab.index(), &ctx);
    frame.render_widget(
        Paragraph::new(tab_line).alignment(Alignment::Center),
        chunks[1],
    );

    match app.view.active_tab {
        Tab::Oracle => oracle::render_oracle(frame, chunks[3], app, &ctx),
        Tab::Library => library::render_library(frame, chunks[3], app, &ctx),
    }
}

fn render_header(frame: &mut Frame, area: ratatui::layout::Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "A T H A R V A",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("VEDA OS • v{}", VERSION),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
