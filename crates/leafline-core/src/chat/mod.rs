//! Chat history service: prompt construction, repository trait, orchestration.

pub mod prompt;
pub mod repository;
pub mod service;
