//! Infrastructure implementations for Leafline.
//!
//! Concrete collaborators behind the traits defined in `leafline-core`:
//! SQLite persistence, the Gemini generation client, the MyMemory
//! translation client, and the product-search HTTP client, plus the
//! configuration loader.

pub mod config;
pub mod llm;
pub mod search;
pub mod sqlite;
pub mod translate;
