//! Shared domain types for Leafline.
//!
//! This crate has no business logic and no I/O. It defines the entities,
//! configuration structures, and error taxonomy shared by the core, infra,
//! and api crates.

pub mod chat;
pub mod config;
pub mod error;
pub mod product;
