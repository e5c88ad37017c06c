//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `leafline-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct for SQLite-to-domain
//! mapping, RFC3339 text timestamps.

use chrono::{DateTime, Utc};
use leafline_core::chat::repository::ChatRepository;
use leafline_types::chat::ChatRecord;
use leafline_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain ChatRecord.
struct ChatRecordRow {
    id: String,
    question: String,
    response: String,
    timestamp: String,
}

impl ChatRecordRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            response: row.try_get("response")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_record(self) -> Result<ChatRecord, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid record id: {e}")))?;
        let timestamp = parse_datetime(&self.timestamp)?;

        Ok(ChatRecord {
            id,
            question: self.question,
            response: self.response,
            timestamp,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

impl ChatRepository for SqliteChatRepository {
    async fn insert(&self, record: &ChatRecord) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO chat_records (id, question, response, timestamp) VALUES (?, ?, ?, ?)")
            .bind(record.id.to_string())
            .bind(&record.question)
            .bind(&record.response)
            .bind(record.timestamp.to_rfc3339())
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ChatRecord>, RepositoryError> {
        // UUID v7 ids break timestamp ties in insertion order.
        let rows = sqlx::query(
            "SELECT id, question, response, timestamp FROM chat_records ORDER BY timestamp ASC, id ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter()
            .map(|row| {
                ChatRecordRow::from_row(row)
                    .map_err(map_sqlx_error)?
                    .into_record()
            })
            .collect()
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM chat_records")
            .execute(&self.pool.writer)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_records")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.0 as u64)
    }
}
