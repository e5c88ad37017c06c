//! Chat history domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answered question in the support chat history.
///
/// Records are immutable after creation: there is no update operation,
/// only the bulk clear. `timestamp` is assigned by the service at insertion
/// and is non-decreasing with insertion order under a single writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// Row identity (UUID v7, time-sortable).
    pub id: Uuid,
    /// The caller's question, stored verbatim. Never empty.
    pub question: String,
    /// The generated answer, or the fixed fallback string when the
    /// generator returned empty text.
    pub response: String,
    /// Creation time, assigned at insertion.
    pub timestamp: DateTime<Utc>,
}

impl ChatRecord {
    /// Build a new record stamped with the current time.
    pub fn new(question: String, response: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            question,
            response,
            timestamp: Utc::now(),
        }
    }
}
