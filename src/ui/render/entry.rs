//! New-task input field and add button.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus};

use super::helpers::{tail_str, ADD_LABEL};

/// Render the input field with its `[Add]` button.
pub fn render_entry(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focus == Focus::Input;
    let button_width = ADD_LABEL.chars().count() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button_width)])
        .split(area);

    let border_color = if is_focused {
        app.theme.border_active
    } else {
        app.theme.border_dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            " New task ",
            Style::default().fg(if is_focused {
                app.theme.accent
            } else {
                app.theme.text_muted
            }),
        ))
        .style(Style::default().bg(app.theme.bg_surface));

    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    // Leave one cell for the cursor
    let visible = tail_str(app.view.input(), (inner.width as usize).saturating_sub(1));
    let cursor_x = inner.x + visible.chars().count() as u16;

    let para = Paragraph::new(visible).style(
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.bg_surface),
    );
    frame.render_widget(para, inner);

    if is_focused && !app.has_alert() && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((cursor_x, inner.y));
    }

    let button = Paragraph::new(Span::styled(
        ADD_LABEL,
        Style::default()
            .fg(app.theme.success)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_dim))
            .style(Style::default().bg(app.theme.bg_surface)),
    );
    frame.render_widget(button, chunks[1]);

    app.hits.input = Some(chunks[0]);
    app.hits.add_button = Some(chunks[1]);
}
