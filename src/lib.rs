//! Linear undo/redo history with a movable cursor.

pub mod memory;

pub use memory::{Remember, RememberConfig, RememberError, Result};
