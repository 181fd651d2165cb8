//! chatrelay-lambda
//!
//! API Gateway proxy handler that relays a chat turn to the generation
//! endpoint and returns the updated conversation.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod invocation;
pub mod state;
