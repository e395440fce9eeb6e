use ratatui::layout::{Position, Rect};

use crate::core::RowHandle;

/// Focus state for the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the new-task field.
    #[default]
    Input,
    /// Navigating the task rows.
    List,
}

/// UI mode (normal vs overlays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal mode.
    #[default]
    Normal,
    /// Viewing help overlay.
    Help,
}

/// Task list selection and scroll state.
#[derive(Debug, Default)]
pub struct ListViewState {
    /// Selected row index.
    pub selected: usize,
    /// Scroll offset (first visible row).
    pub scroll: usize,
}

/// UI mode and message state.
#[derive(Debug, Default)]
pub struct UiState {
    /// Current mode.
    pub mode: Mode,
    /// Error message.
    pub error: Option<String>,
    /// Status message.
    pub status: Option<String>,
    /// Dirty flag for redraw.
    pub dirty: bool,
}

/// Clickable regions from the last rendered frame.
#[derive(Debug, Default)]
pub struct HitMap {
    /// The `[Add]` button.
    pub add_button: Option<Rect>,
    /// The input field.
    pub input: Option<Rect>,
    /// Each visible row's `[Remove]` control.
    pub remove_buttons: Vec<(Rect, RowHandle)>,
    /// Each visible row's full line, with its display index.
    pub rows: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Forget all regions before a new frame records them.
    pub fn clear(&mut self) {
        self.add_button = None;
        self.input = None;
        self.remove_buttons.clear();
        self.rows.clear();
    }

    /// What sits under a screen position.
    pub fn hit(&self, pos: Position) -> Option<Hit> {
        if self.add_button.is_some_and(|r| r.contains(pos)) {
            return Some(Hit::AddButton);
        }
        if let Some((_, handle)) = self.remove_buttons.iter().find(|(r, _)| r.contains(pos)) {
            return Some(Hit::RemoveButton(*handle));
        }
        if self.input.is_some_and(|r| r.contains(pos)) {
            return Some(Hit::Input);
        }
        self.rows
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|(_, idx)| Hit::Row(*idx))
    }
}

/// Target of a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The `[Add]` button.
    AddButton,
    /// A row's `[Remove]` control.
    RemoveButton(RowHandle),
    /// The input field.
    Input,
    /// A row body.
    Row(usize),
}
