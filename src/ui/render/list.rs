//! Task row rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, Focus};

use super::helpers::{truncate_str, REMOVE_LABEL};

/// Render the task rows, each ending in a remove control.
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focus == Focus::List;

    let border_color = if is_focused {
        app.theme.border_active
    } else {
        app.theme.border_dim
    };
    let title_style = if is_focused {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.text_muted)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" Tasks ", title_style))
        .style(Style::default().bg(app.theme.bg_surface));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    if height == 0 {
        return;
    }

    if app.view.is_empty() {
        let para = Paragraph::new("No tasks yet").style(
            Style::default()
                .fg(app.theme.text_muted)
                .bg(app.theme.bg_surface),
        );
        frame.render_widget(para, inner);
        return;
    }

    let total = app.view.len();
    let selected = app.list.selected.min(total - 1);

    // Keep selection visible
    let max_scroll = total.saturating_sub(height);
    app.list.scroll = app.list.scroll.min(max_scroll);
    if selected < app.list.scroll {
        app.list.scroll = selected;
    } else if selected >= app.list.scroll + height {
        app.list.scroll = selected + 1 - height;
    }

    let end = (app.list.scroll + height).min(total);
    let number_width = total.to_string().len();
    let label_width = REMOVE_LABEL.chars().count();
    // indicator + number + ". " + text + " " + label
    let fixed = 1 + number_width + 2 + 1 + label_width;
    let text_width = (inner.width as usize).saturating_sub(fixed);
    // Too narrow and the label is clipped; leave it unclickable.
    let label_visible = inner.width as usize >= fixed;

    let mut lines: Vec<Line> = Vec::with_capacity(height);
    for idx in app.list.scroll..end {
        let Some(row) = app.view.row(idx) else {
            break;
        };
        let is_selected = idx == selected;
        let y = inner.y + (idx - app.list.scroll) as u16;

        let row_bg = if is_selected {
            app.theme.bg_selected
        } else {
            app.theme.bg_surface
        };

        // Selection indicator (left edge)
        let select_indicator = if is_selected { "▌" } else { " " };
        let select_style = Style::default()
            .fg(if is_selected && is_focused {
                app.theme.accent
            } else {
                row_bg
            })
            .bg(row_bg);

        let text_color = if is_selected {
            app.theme.text_bright
        } else {
            app.theme.text_normal
        };

        let text = truncate_str(&row.text, text_width);
        let pad = text_width.saturating_sub(text.chars().count());

        lines.push(Line::from(vec![
            Span::styled(select_indicator, select_style),
            Span::styled(
                format!("{:>width$}. ", idx + 1, width = number_width),
                Style::default().fg(app.theme.text_muted).bg(row_bg),
            ),
            Span::styled(text, Style::default().fg(text_color).bg(row_bg)),
            Span::styled(" ".repeat(pad + 1), Style::default().bg(row_bg)),
            Span::styled(
                REMOVE_LABEL,
                Style::default()
                    .fg(app.theme.error)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        app.hits
            .rows
            .push((Rect::new(inner.x, y, inner.width, 1), idx));
        if label_visible {
            let label_x = inner.x + inner.width - label_width as u16;
            app.hits
                .remove_buttons
                .push((Rect::new(label_x, y, label_width as u16, 1), row.handle));
        }
    }

    let para = Paragraph::new(lines).style(Style::default().bg(app.theme.bg_surface));
    frame.render_widget(para, inner);
}
