use ratatui::layout::Position;

use super::{App, Focus, Hit, Mode};
use crate::core::{ItemInput, ListError, RemoveOutcome, RemoveRequest, Row, RowHandle};

/// Max characters of task text echoed in status messages.
const STATUS_TEXT_WIDTH: usize = 40;

impl App {
    /// Add a task from the input field (Enter key or `[Add]` button).
    pub fn submit_input(&mut self) {
        match self.manager.add_item(&mut self.view, ItemInput::FromField) {
            Ok(item) => {
                self.list.selected = self.view.len().saturating_sub(1);
                self.ui.error = None;
                self.ui.status = Some(format!(
                    "Added \"{}\"",
                    crate::ui::render::truncate_str(item.as_str(), STATUS_TEXT_WIDTH)
                ));
            }
            // The alert is already queued on the view.
            Err(ListError::EmptyInput) => {}
            Err(e) => {
                self.ui.error = Some(e.to_string());
            }
        }
        self.ui.dirty = true;
    }

    /// Press the `[Remove]` control of the selected row.
    pub fn remove_selected(&mut self) {
        self.remove_at(self.list.selected);
    }

    /// Press the `[Remove]` control of the row at display index `idx`.
    pub fn remove_at(&mut self, idx: usize) {
        if let Some(request) = self.view.row(idx).map(Row::remove_request) {
            self.dispatch_remove(request);
        }
    }

    /// Press the `[Remove]` control of the row with `handle`.
    pub fn remove_handle(&mut self, handle: RowHandle) {
        let request = self
            .view
            .rows()
            .iter()
            .find(|r| r.handle == handle)
            .map(Row::remove_request);
        if let Some(request) = request {
            self.dispatch_remove(request);
        }
    }

    /// Deliver a row's remove message to the list manager.
    pub fn dispatch_remove(&mut self, request: RemoveRequest) {
        match self.manager.remove_item(&mut self.view, &request) {
            Ok(RemoveOutcome::Removed) => {
                self.ui.error = None;
                self.ui.status = Some(format!(
                    "Removed \"{}\"",
                    crate::ui::render::truncate_str(&request.text, STATUS_TEXT_WIDTH)
                ));
            }
            Ok(RemoveOutcome::Stale) => {}
            Err(e) => {
                self.ui.error = Some(e.to_string());
            }
        }
        self.clamp_selection();
        self.ui.dirty = true;
    }

    /// Dismiss the oldest pending alert.
    pub fn dismiss_alert(&mut self) {
        if self.view.take_alert().is_some() {
            self.ui.dirty = true;
        }
    }

    /// Open the help overlay.
    pub fn open_help(&mut self) {
        self.ui.mode = Mode::Help;
        self.ui.dirty = true;
    }

    /// Close any overlay.
    pub fn close_overlay(&mut self) {
        self.ui.mode = Mode::Normal;
        self.ui.dirty = true;
    }

    /// Handle a left click at a screen position.
    pub fn click(&mut self, pos: Position) {
        if self.has_alert() {
            self.dismiss_alert();
            return;
        }
        if self.ui.mode != Mode::Normal {
            self.close_overlay();
            return;
        }

        match self.hits.hit(pos) {
            Some(Hit::AddButton) => self.submit_input(),
            Some(Hit::RemoveButton(handle)) => self.remove_handle(handle),
            Some(Hit::Input) => self.set_focus(Focus::Input),
            Some(Hit::Row(idx)) => {
                self.list.selected = idx;
                self.set_focus(Focus::List);
                self.ui.dirty = true;
            }
            None => {}
        }
    }
}
