//! Core logic for remembering, navigating and forgetting actions.

pub mod config;
pub mod error;
pub mod remember;

pub use config::RememberConfig;
pub use error::{RememberError, Result};
pub use remember::Remember;
