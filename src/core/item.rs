//! Task items and add-input resolution.

use std::fmt;

/// A single task entry. Text is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item(String);

impl Item {
    /// Build an item from raw text, trimming surrounding whitespace.
    /// Returns `None` if nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Get the item text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Where the text for a new item comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemInput {
    /// Read the current value of the input field (cleared after a successful add).
    FromField,
    /// Use the given text; the input field is left untouched.
    Explicit(String),
}

impl ItemInput {
    /// Shorthand for `ItemInput::Explicit`.
    pub fn explicit(text: impl Into<String>) -> Self {
        Self::Explicit(text.into())
    }

    /// Whether the text is read from the input field.
    pub fn is_from_field(&self) -> bool {
        matches!(self, Self::FromField)
    }
}
