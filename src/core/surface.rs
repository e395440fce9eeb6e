//! Host surfaces the list manager drives: rows, the input field, notifications.

use std::collections::VecDeque;

/// Opaque reference to one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowHandle(u64);

impl RowHandle {
    /// Raw handle value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Message sent by a row's Remove control.
///
/// Carries the text captured when the row was created, not looked up later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveRequest {
    /// Row to detach.
    pub handle: RowHandle,
    /// Item text the row was created with.
    pub text: String,
}

/// One row of the visual projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row handle.
    pub handle: RowHandle,
    /// Displayed item text.
    pub text: String,
}

impl Row {
    /// The message this row's Remove control dispatches.
    pub fn remove_request(&self) -> RemoveRequest {
        RemoveRequest {
            handle: self.handle,
            text: self.text.clone(),
        }
    }
}

/// Everything the list manager needs from its host.
pub trait Surface {
    /// Append a row with `text` to the end of the projection.
    fn append_row(&mut self, text: &str) -> RowHandle;

    /// Detach a row. Returns false if it was no longer attached.
    fn remove_row(&mut self, handle: RowHandle) -> bool;

    /// Current value of the input field.
    fn input_value(&self) -> &str;

    /// Clear the input field.
    fn clear_input(&mut self);

    /// Show a blocking notification to the user.
    fn alert(&mut self, message: &str);
}

/// In-memory projection: rows, input buffer and pending alerts.
#[derive(Debug, Default, Clone)]
pub struct VisualList {
    rows: Vec<Row>,
    next_handle: u64,
    input: String,
    alerts: VecDeque<String>,
}

impl VisualList {
    /// Create an empty projection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at a display position.
    pub fn row(&self, idx: usize) -> Option<&Row> {
        self.rows.get(idx)
    }

    /// Number of attached rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no rows are attached.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row texts in display order.
    pub fn texts(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.text.as_str()).collect()
    }

    /// First attached row with exactly this text.
    pub fn find(&self, text: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.text == text)
    }

    /// Input field contents.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input field contents.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Append a character to the input field.
    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character of the input field.
    pub fn pop_input(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Oldest alert not yet dismissed.
    pub fn pending_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    /// Dismiss and return the oldest alert.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alerts.pop_front()
    }
}

impl Surface for VisualList {
    fn append_row(&mut self, text: &str) -> RowHandle {
        let handle = RowHandle(self.next_handle);
        self.next_handle += 1;
        self.rows.push(Row {
            handle,
            text: text.to_string(),
        });
        handle
    }

    fn remove_row(&mut self, handle: RowHandle) -> bool {
        match self.rows.iter().position(|r| r.handle == handle) {
            Some(idx) => {
                self.rows.remove(idx);
                true
            }
            None => false,
        }
    }

    fn input_value(&self) -> &str {
        &self.input
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }
}
