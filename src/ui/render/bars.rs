//! Top and bottom bar rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::{App, Focus};

/// Render the top bar with the title and task count.
pub fn render_top_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = Style::default().bg(app.theme.bg_elevated);

    let count = app.items().len();
    let right_text = match count {
        1 => "1 task  ".to_string(),
        n => format!("{} tasks  ", n),
    };

    let mut spans = vec![
        Span::styled("  ", bg),
        Span::styled(
            "tasklist",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.bg_elevated)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(right_text.chars().count());
    spans.push(Span::styled(" ".repeat(padding_len), bg));
    spans.push(Span::styled(
        right_text,
        Style::default()
            .fg(app.theme.text_muted)
            .bg(app.theme.bg_elevated),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the bottom bar: error, status, or key hints.
pub fn render_bottom_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.bg_elevated;

    let (text, color) = if let Some(ref err) = app.ui.error {
        (format!(" {}", err), app.theme.error)
    } else if let Some(ref status) = app.ui.status {
        (format!(" {}", status), app.theme.success)
    } else {
        let hints = match app.focus {
            Focus::Input => " enter add  tab list  esc quit",
            Focus::List => " j/k move  d remove  i type  ? help  q quit",
        };
        (hints.to_string(), app.theme.text_muted)
    };

    let para = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(color).bg(bg),
    )))
    .style(Style::default().bg(bg));
    frame.render_widget(para, area);
}
