//! Chat service orchestrating generation and history persistence.
//!
//! Each operation is a single independent request/response cycle; the
//! service holds no cross-call state. All continuity lives in the persisted
//! history, re-fetched per call.

use leafline_types::chat::ChatRecord;
use leafline_types::error::ChatError;
use tracing::{info, warn};

use crate::chat::prompt::{FALLBACK_RESPONSE, build_prompt};
use crate::chat::repository::ChatRepository;
use crate::generate::TextGenerator;

/// Orchestrates question answering and chat history persistence.
///
/// Generic over `ChatRepository` and `TextGenerator` so it can be exercised
/// with substitute collaborators in tests (leafline-core never depends on
/// leafline-infra). Collaborators are injected at construction; there are
/// no process-wide singletons.
pub struct ChatService<R: ChatRepository, G: TextGenerator> {
    repo: R,
    generator: G,
}

impl<R: ChatRepository, G: TextGenerator> ChatService<R, G> {
    /// Create a new chat service with the given collaborators.
    pub fn new(repo: R, generator: G) -> Self {
        Self { repo, generator }
    }

    /// Answer a question and record the exchange.
    ///
    /// Validates input before contacting any collaborator, asks the
    /// generator with the fixed domain-restriction prompt, substitutes the
    /// fallback string for empty output, then inserts one record stamped
    /// with the current time. If the insert fails after generation
    /// succeeded, the whole call fails; the generated text is lost from
    /// history (no retry, no outbox).
    pub async fn submit_question(&self, question: &str) -> Result<String, ChatError> {
        if question.trim().is_empty() {
            return Err(ChatError::Validation("question is required".to_string()));
        }

        let prompt = build_prompt(question);
        let generated = self.generator.generate(&prompt).await?;

        let response = if generated.is_empty() {
            FALLBACK_RESPONSE.to_string()
        } else {
            generated
        };

        let record = ChatRecord::new(question.to_string(), response.clone());
        if let Err(e) = self.repo.insert(&record).await {
            // The caller gets a failure even though generation succeeded;
            // the answer is never recorded in history.
            warn!(error = %e, "generated response lost: history insert failed");
            return Err(e.into());
        }

        info!(record_id = %record.id, "chat exchange recorded");
        Ok(response)
    }

    /// All recorded exchanges, oldest first.
    pub async fn list_history(&self) -> Result<Vec<ChatRecord>, ChatError> {
        Ok(self.repo.list_all().await?)
    }

    /// Delete every recorded exchange, returning the number removed.
    ///
    /// Unconditional and idempotent: clearing an empty history returns 0.
    pub async fn clear_history(&self) -> Result<u64, ChatError> {
        let deleted = self.repo.delete_all().await?;
        info!(deleted, "chat history cleared");
        Ok(deleted)
    }
}
