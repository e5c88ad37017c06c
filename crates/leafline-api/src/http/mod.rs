//! HTTP surface of the chat history service.

pub mod error;
pub mod handlers;
pub mod router;
