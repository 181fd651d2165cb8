//! chatrelay-generate
//!
//! Client for the remote text-generation endpoint and classification of
//! its failures.

pub mod client;
pub mod error;
pub mod payload;
