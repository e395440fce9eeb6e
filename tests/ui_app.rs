use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, style::Color, Terminal};
use tasklist::core::{FileStore, KeyValueStore, MemoryStore, EMPTY_INPUT_MESSAGE, TASKS_KEY};
use tasklist::ui::{handle_input, render, App, Focus, Mode};
use tempfile::TempDir;

fn app_with(stored: Option<&str>) -> App {
    let store = match stored {
        Some(value) => MemoryStore::with_entry(TASKS_KEY, value),
        None => MemoryStore::new(),
    };
    App::new(Box::new(store), Some("default"))
}

fn key(app: &mut App, code: KeyCode) -> bool {
    handle_input(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        key(app, KeyCode::Char(c));
    }
}

fn stored(app: &App) -> Option<String> {
    app.manager().store().get(TASKS_KEY).unwrap()
}

fn click(app: &mut App, column: u16, row: u16) {
    handle_input(
        app,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }),
    );
}

fn draw(app: &mut App) -> Terminal<TestBackend> {
    draw_sized(app, 60, 16)
}

fn draw_sized(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| render(frame, app)).unwrap();
    terminal
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn starts_with_stored_rows() {
    let app = app_with(Some(r#"["X","Y"]"#));
    assert_eq!(app.view.texts(), vec!["X", "Y"]);
    assert_eq!(app.focus, Focus::Input);
}

#[test]
fn enter_adds_from_field_and_clears_it() {
    let mut app = app_with(None);
    type_text(&mut app, "Buy milk");
    assert_eq!(app.view.input(), "Buy milk");

    key(&mut app, KeyCode::Enter);

    assert_eq!(app.view.input(), "");
    assert_eq!(app.view.texts(), vec!["Buy milk"]);
    assert_eq!(stored(&app).as_deref(), Some(r#"["Buy milk"]"#));
    assert!(app.ui.status.as_deref().unwrap().contains("Buy milk"));
}

#[test]
fn blank_enter_shows_blocking_alert() {
    let mut app = app_with(None);
    type_text(&mut app, "   ");
    key(&mut app, KeyCode::Enter);

    assert!(app.has_alert());
    assert_eq!(app.view.pending_alert(), Some(EMPTY_INPUT_MESSAGE));
    assert!(app.view.is_empty());
    assert_eq!(stored(&app), None);

    // Typing is swallowed while the alert is up
    key(&mut app, KeyCode::Char('x'));
    assert_eq!(app.view.input(), "   ");

    key(&mut app, KeyCode::Enter);
    assert!(!app.has_alert());
    assert!(app.view.is_empty());
}

#[test]
fn list_focus_removes_selected() {
    let mut app = app_with(Some(r#"["A","B","C"]"#));
    key(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::List);

    key(&mut app, KeyCode::Char('j'));
    key(&mut app, KeyCode::Char('d'));

    assert_eq!(app.view.texts(), vec!["A", "C"]);
    assert_eq!(stored(&app).as_deref(), Some(r#"["A","C"]"#));
    assert_eq!(app.list.selected, 1);

    key(&mut app, KeyCode::Char('G'));
    key(&mut app, KeyCode::Delete);
    assert_eq!(app.view.texts(), vec!["A"]);
    assert_eq!(app.list.selected, 0);
}

#[test]
fn remove_on_empty_list_is_noop() {
    let mut app = app_with(None);
    key(&mut app, KeyCode::Tab);
    key(&mut app, KeyCode::Char('d'));
    assert!(app.view.is_empty());
    assert_eq!(app.manager().len(), 0);
}

#[test]
fn list_keys_do_not_type() {
    let mut app = app_with(Some(r#"["A"]"#));
    key(&mut app, KeyCode::Tab);
    key(&mut app, KeyCode::Char('?'));
    assert_eq!(app.ui.mode, Mode::Help);
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.ui.mode, Mode::Normal);

    key(&mut app, KeyCode::Char('i'));
    assert_eq!(app.focus, Focus::Input);
    type_text(&mut app, "q");
    assert_eq!(app.view.input(), "q");
    assert!(!app.should_quit);
}

#[test]
fn quit_keys() {
    let mut app = app_with(None);
    key(&mut app, KeyCode::Esc);
    assert!(app.should_quit);

    let mut app = app_with(None);
    type_text(&mut app, "draft");
    key(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);
    assert_eq!(app.view.input(), "");

    let mut app = app_with(None);
    handle_input(
        &mut app,
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
    );
    assert!(app.should_quit);
}

#[test]
fn paste_fills_input() {
    let mut app = app_with(None);
    handle_input(&mut app, Event::Paste("line one\nline two".to_string()));
    assert_eq!(app.view.input(), "line one line two");
}

#[test]
fn render_shows_rows_and_controls() {
    let mut app = app_with(Some(r#"["Buy milk","Walk dog"]"#));
    let terminal = draw(&mut app);
    let text = screen_text(&terminal);

    assert!(text.contains("Buy milk"));
    assert!(text.contains("Walk dog"));
    assert!(text.contains("[Remove]"));
    assert!(text.contains("[Add]"));
    assert!(text.contains("2 tasks"));
    assert_eq!(app.hits.remove_buttons.len(), 2);
}

#[test]
fn render_alert_overlay() {
    let mut app = app_with(None);
    key(&mut app, KeyCode::Enter);
    let text = screen_text(&draw(&mut app));
    assert!(text.contains(EMPTY_INPUT_MESSAGE));
}

#[test]
fn click_remove_and_add_buttons() {
    let mut app = app_with(Some(r#"["A","B"]"#));
    draw(&mut app);

    let (rect, _) = app.hits.remove_buttons[0];
    click(&mut app, rect.x + 1, rect.y);
    assert_eq!(app.view.texts(), vec!["B"]);
    assert_eq!(stored(&app).as_deref(), Some(r#"["B"]"#));

    app.view.set_input("C");
    draw(&mut app);
    let add = app.hits.add_button.unwrap();
    click(&mut app, add.x + 2, add.y + 1);
    assert_eq!(app.view.texts(), vec!["B", "C"]);
    assert_eq!(app.view.input(), "");
}

#[test]
fn narrow_terminal_has_no_hidden_remove_targets() {
    let mut app = app_with(Some(r#"["A","B"]"#));
    // Border (2) + indicator, number, ". ", space and label need 13 columns.
    draw_sized(&mut app, 14, 16);

    assert!(app.hits.remove_buttons.is_empty());
    assert_eq!(app.hits.rows.len(), 2);

    let (rect, _) = app.hits.rows[0];
    click(&mut app, rect.x + rect.width - 1, rect.y);
    assert_eq!(app.view.texts(), vec!["A", "B"]);
}

#[test]
fn focused_list_uses_active_border() {
    let mut app = app_with(Some(r#"["A"]"#));
    app.theme.border_active = Color::Magenta;
    key(&mut app, KeyCode::Tab);

    let terminal = draw(&mut app);
    // Top-left corner of the list block, just below the top bar.
    assert_eq!(terminal.backend().buffer()[(0, 1)].fg, Color::Magenta);
}

#[test]
fn click_dismisses_alert_first() {
    let mut app = app_with(Some(r#"["A"]"#));
    key(&mut app, KeyCode::Enter);
    draw(&mut app);
    assert!(app.has_alert());

    let (rect, _) = app.hits.remove_buttons[0];
    click(&mut app, rect.x + 1, rect.y);

    assert!(!app.has_alert());
    assert_eq!(app.view.texts(), vec!["A"]);
}

#[test]
fn file_backed_app_persists_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut app = App::new(Box::new(FileStore::with_path(path.clone())), None);
        type_text(&mut app, "first");
        key(&mut app, KeyCode::Enter);
        type_text(&mut app, "second");
        key(&mut app, KeyCode::Enter);
    }

    let app = App::new(Box::new(FileStore::with_path(path)), None);
    assert_eq!(app.view.texts(), vec!["first", "second"]);
}
