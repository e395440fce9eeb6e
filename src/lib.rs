//! tasklist - A small terminal task list with durable storage.
//!
//! The [`core::ListManager`] owns the task list and keeps a visual
//! projection and a key-value store in step with it after every add and
//! remove. The terminal UI and the CLI are thin hosts around it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tasklist::prelude::*;
//!
//! let mut view = VisualList::new();
//! let mut manager = ListManager::new(MemoryStore::new());
//! manager.initialize(&mut view);
//! manager.add_item(&mut view, ItemInput::explicit("Buy milk"))?;
//! ```

#![deny(missing_docs)]

pub mod cli;
pub mod core;
pub mod logging;
pub mod metrics;
pub mod prelude;
pub mod theme;
pub mod ui;
