//! Translator trait definition.
//!
//! The translation collaborator is best-effort by contract: implementations
//! return the original text untouched on any failure, and skip the network
//! round trip entirely when source and target languages match.

/// Trait for the translation collaborator.
///
/// Implementations live in leafline-infra (e.g., `MyMemoryTranslator`).
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `target` (ISO 639-1 codes).
    ///
    /// Infallible by design: the original text is the fallback.
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> impl std::future::Future<Output = String> + Send;
}
