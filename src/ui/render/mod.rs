//! UI rendering with ratatui.
//!
//! Layout, top to bottom: title bar, task rows, input field with `[Add]`
//! button, bottom bar. Alerts and help draw as overlays.

mod bars;
mod entry;
mod helpers;
mod list;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::app::{App, Mode};

pub use helpers::{centered_rect, truncate_str, ADD_LABEL, REMOVE_LABEL};

/// Main render function.
pub fn render(frame: &mut Frame, app: &mut App) {
    let _timer = crate::metrics::Timer::start("render_frame");

    app.hits.clear();

    // Fill background
    let bg_block = Block::default().style(Style::default().bg(app.theme.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(3),    // Task rows
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Bottom bar
        ])
        .split(frame.area());

    bars::render_top_bar(frame, app, chunks[0]);
    list::render_list(frame, app, chunks[1]);
    entry::render_entry(frame, app, chunks[2]);
    bars::render_bottom_bar(frame, app, chunks[3]);

    // Overlays
    if app.ui.mode == Mode::Help {
        overlays::render_help_overlay(frame, app);
    }
    if let Some(message) = app.view.pending_alert() {
        overlays::render_alert_overlay(frame, app, message);
    }
}
