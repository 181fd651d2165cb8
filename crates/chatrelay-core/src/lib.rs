//! chatrelay-core
//!
//! Pure domain types: chat turns, prompt rendering, and the result envelope
//! returned to callers. No network dependency.

pub mod envelope;
pub mod models;
pub mod prompt;
