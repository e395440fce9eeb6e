use super::{App, Focus};

impl App {
    /// Move selection up in the task list.
    pub fn select_prev(&mut self) {
        if self.list.selected > 0 {
            self.list.selected -= 1;
            self.ui.dirty = true;
        }
    }

    /// Move selection down in the task list.
    pub fn select_next(&mut self) {
        if self.list.selected + 1 < self.view.len() {
            self.list.selected += 1;
            self.ui.dirty = true;
        }
    }

    /// Jump to the first task.
    pub fn select_first(&mut self) {
        self.list.selected = 0;
        self.ui.dirty = true;
    }

    /// Jump to the last task.
    pub fn select_last(&mut self) {
        self.list.selected = self.view.len().saturating_sub(1);
        self.ui.dirty = true;
    }

    /// Keep the selection inside the row range after a removal.
    pub(crate) fn clamp_selection(&mut self) {
        let max = self.view.len().saturating_sub(1);
        self.list.selected = self.list.selected.min(max);
    }

    /// Switch focus between the input field and the list.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
        self.ui.dirty = true;
    }

    /// Explicitly set the UI focus.
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.ui.dirty = true;
        }
    }
}
