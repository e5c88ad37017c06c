//! Business logic for the Leafline support chat.
//!
//! Defines the collaborator traits (persistence, generation, translation,
//! product search) and the service that orchestrates them. Concrete
//! implementations live in `leafline-infra`; this crate never performs I/O
//! of its own.

pub mod chat;
pub mod client;
pub mod generate;
