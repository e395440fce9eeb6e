//! Persisted snapshot format: a JSON array of strings under one key.

use crate::core::Item;

/// Store key the item list is persisted under.
pub const TASKS_KEY: &str = "tasks";

/// How a stored snapshot was recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotStatus {
    /// No value was stored under the key.
    Absent,
    /// The value parsed as an array of strings.
    Loaded,
    /// The value was present but not an array of strings.
    Corrupt,
}

/// Items recovered from a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recovered {
    /// Recovered items in stored order.
    pub items: Vec<Item>,
    /// Recovery outcome.
    pub status: SnapshotStatus,
    /// Number of blank entries dropped while decoding.
    pub dropped: usize,
}

impl Recovered {
    fn empty(status: SnapshotStatus) -> Self {
        Self {
            items: Vec::new(),
            status,
            dropped: 0,
        }
    }
}

/// Serialize items into the snapshot format.
pub fn encode(items: &[Item]) -> String {
    let texts: Vec<&str> = items.iter().map(Item::as_str).collect();
    // Serializing a slice of &str cannot fail.
    serde_json::to_string(&texts).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored snapshot.
///
/// Anything other than a JSON array of strings recovers to an empty list.
/// String entries are trimmed; blank ones are dropped.
pub fn decode(stored: Option<&str>) -> Recovered {
    let Some(raw) = stored else {
        return Recovered::empty(SnapshotStatus::Absent);
    };

    let texts: Vec<String> = match serde_json::from_str(raw) {
        Ok(texts) => texts,
        Err(_) => return Recovered::empty(SnapshotStatus::Corrupt),
    };

    let total = texts.len();
    let items: Vec<Item> = texts.iter().filter_map(|t| Item::parse(t)).collect();

    Recovered {
        dropped: total - items.len(),
        items,
        status: SnapshotStatus::Loaded,
    }
}
