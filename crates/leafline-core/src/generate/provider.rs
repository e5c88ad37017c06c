//! TextGenerator trait definition.
//!
//! The abstraction over the hosted text-generation service. Implementations
//! live in leafline-infra (e.g., `GeminiGenerator`). Uses native async fn in
//! traits (RPITIT, Rust 2024 edition).

use leafline_types::error::GenerationError;

/// Trait for text-generation backends.
pub trait TextGenerator: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Submit a prompt and receive the generated text.
    ///
    /// Empty output is a valid success; the caller decides how to handle it
    /// (the chat service substitutes a fixed fallback string).
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerationError>> + Send;
}
