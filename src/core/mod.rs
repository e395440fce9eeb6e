//! Core primitives for tasklist (no TUI dependencies).

mod item;
mod manager;
pub mod snapshot;
mod store;
mod surface;

pub use item::*;
pub use manager::*;
pub use snapshot::TASKS_KEY;
pub use store::*;
pub use surface::*;
