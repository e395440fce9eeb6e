//! Common re-exports for convenient importing.
//!
//! # Example
//!
//! ```rust,ignore
//! use tasklist::prelude::*;
//! ```

pub use crate::core::{
    FileStore, Item, ItemInput, KeyValueStore, ListError, ListManager, MemoryStore,
    RemoveOutcome, RemoveRequest, Row, RowHandle, Surface, VisualList, TASKS_KEY,
};
