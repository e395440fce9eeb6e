//! Application state and lifecycle.

use crate::core::{Item, KeyValueStore, ListManager, VisualList};
use crate::theme::Theme;

mod actions;
mod navigation;
mod state;

pub use state::{Focus, Hit, HitMap, ListViewState, Mode, UiState};

/// Application state.
pub struct App {
    /// Owns the task list and its store.
    manager: ListManager<Box<dyn KeyValueStore>>,
    /// Rendered rows, input field and pending alerts.
    pub view: VisualList,
    /// Current focus.
    pub focus: Focus,
    /// Row selection state.
    pub list: ListViewState,
    /// UI state (mode, messages).
    pub ui: UiState,
    /// Clickable regions from the last frame.
    pub hits: HitMap,
    /// Should the app quit?
    pub should_quit: bool,
    /// Current color theme.
    pub theme: Theme,
}

impl App {
    /// Create the app and load the persisted tasks from `store`.
    pub fn new(store: Box<dyn KeyValueStore>, theme_name: Option<&str>) -> Self {
        let mut view = VisualList::new();
        let mut manager = ListManager::new(store);
        manager.initialize(&mut view);

        Self {
            manager,
            view,
            focus: Focus::Input,
            list: ListViewState::default(),
            ui: UiState {
                dirty: true,
                ..UiState::default()
            },
            hits: HitMap::default(),
            should_quit: false,
            theme: Theme::load(theme_name.unwrap_or("default")),
        }
    }

    /// Tasks in insertion order.
    pub fn items(&self) -> &[Item] {
        self.manager.items()
    }

    /// The list manager.
    pub fn manager(&self) -> &ListManager<Box<dyn KeyValueStore>> {
        &self.manager
    }

    /// Whether a blocking alert is waiting to be dismissed.
    pub fn has_alert(&self) -> bool {
        self.view.pending_alert().is_some()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.ui.dirty = true;
    }

    /// Clear the dirty flag after drawing.
    pub fn clear_dirty(&mut self) {
        self.ui.dirty = false;
    }
}
