//! Modal overlay rendering (alerts, help).

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::app::App;

use super::helpers::centered_rect;

/// Render a blocking alert.
pub fn render_alert_overlay(frame: &mut Frame, app: &App, message: &str) {
    let area = frame.area();
    let width = (message.chars().count() as u16 + 8).clamp(30, 60);
    let overlay_area = centered_rect(area, width, 6);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.warning))
        .title(Span::styled(
            " Notice ",
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.bg_elevated));

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(app.theme.text_bright),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "enter to dismiss",
            Style::default().fg(app.theme.text_muted),
        )),
    ];

    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, overlay_area);
}

/// Render the help overlay.
pub fn render_help_overlay(frame: &mut Frame, app: &App) {
    const HELP: &[(&str, &str)] = &[
        ("tab", "switch between input and list"),
        ("enter", "add the typed task"),
        ("esc", "clear input / quit when empty"),
        ("j / k", "move selection"),
        ("g / G", "first / last task"),
        ("d / del", "remove selected task"),
        ("i", "back to input"),
        ("click", "[Add] or a row's [Remove]"),
        ("q", "quit"),
    ];

    let overlay_area = centered_rect(frame.area(), 48, HELP.len() as u16 + 2);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.bg_elevated));

    let lines: Vec<Line> = HELP
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<9}", key),
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(app.theme.text_normal)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}
