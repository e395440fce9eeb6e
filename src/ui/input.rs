//! Input handling.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::app::{App, Focus, Mode};

/// Handle a crossterm event.
/// Returns true if the event was handled.
pub fn handle_input(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => handle_paste(app, &text),
        _ => false,
    }
}

/// Handle a key event.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return true;
    }

    // Alerts block everything else until dismissed
    if app.has_alert() {
        return handle_alert_key(app, key);
    }

    if app.ui.mode == Mode::Help {
        return handle_help_key(app, key);
    }

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return true;
    }

    match app.focus {
        Focus::Input => handle_field_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// Handle keys while an alert is shown.
fn handle_alert_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.dismiss_alert();
            true
        }
        _ => false,
    }
}

/// Handle keys in the help overlay.
fn handle_help_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_overlay();
            true
        }
        _ => false,
    }
}

/// Handle keys when the input field is focused.
fn handle_field_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.submit_input();
            true
        }
        KeyCode::Backspace => {
            app.view.pop_input();
            app.mark_dirty();
            true
        }
        KeyCode::Esc => {
            if app.view.input().is_empty() {
                app.should_quit = true;
            } else {
                app.view.set_input("");
                app.mark_dirty();
            }
            true
        }
        KeyCode::Down => {
            app.set_focus(Focus::List);
            true
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.view.push_input(c);
            app.mark_dirty();
            true
        }
        _ => false,
    }
}

/// Handle keys when the task list is focused.
fn handle_list_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
            true
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.select_first();
            true
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.select_last();
            true
        }
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            app.remove_selected();
            true
        }
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Esc => {
            app.set_focus(Focus::Input);
            true
        }
        KeyCode::Char('?') => {
            app.open_help();
            true
        }
        _ => false,
    }
}

/// Handle a mouse event.
fn handle_mouse(app: &mut App, mouse: MouseEvent) -> bool {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(Position::new(mouse.column, mouse.row));
            true
        }
        MouseEventKind::ScrollDown if !app.has_alert() => {
            app.select_next();
            true
        }
        MouseEventKind::ScrollUp if !app.has_alert() => {
            app.select_prev();
            true
        }
        _ => false,
    }
}

/// Handle bracketed paste into the input field.
fn handle_paste(app: &mut App, text: &str) -> bool {
    if app.has_alert() || app.focus != Focus::Input || app.ui.mode != Mode::Normal {
        return false;
    }
    // Single-line field: newlines become spaces
    for c in text.chars() {
        app.view
            .push_input(if c == '\n' || c == '\r' { ' ' } else { c });
    }
    app.mark_dirty();
    true
}
