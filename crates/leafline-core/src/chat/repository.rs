//! ChatRepository trait definition.
//!
//! Implementations live in leafline-infra (e.g., `SqliteChatRepository`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use leafline_types::chat::ChatRecord;
use leafline_types::error::RepositoryError;

/// Repository trait for chat record persistence.
pub trait ChatRepository: Send + Sync {
    /// Insert one record. Records are immutable after insertion.
    fn insert(
        &self,
        record: &ChatRecord,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// All records, ordered by ascending timestamp (insertion order).
    /// An empty collection yields an empty vec.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ChatRecord>, RepositoryError>> + Send;

    /// Delete every record unconditionally. Returns the number removed
    /// (0 on an already-empty collection).
    fn delete_all(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Total number of stored records.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
