//! Chat history handlers: submit a question, list history, clear history.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use leafline_types::chat::ChatRecord;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for POST /chatbot/query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The caller's question. Optional in the body so a missing field maps
    /// to a 400 rather than a deserialization rejection.
    #[serde(default)]
    pub question: Option<String>,
}

/// Response body for POST /chatbot/query.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

/// Response body for DELETE /chatbot/history.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub message: String,
}

/// POST /chatbot/query - Answer a question and record the exchange.
pub async fn submit_query(
    State(state): State<AppState>,
    Json(body): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let question = body.question.unwrap_or_default();

    let response = state
        .chat_service
        .submit_question(&question)
        .await
        .map_err(|e| {
            if e.is_validation() {
                AppError::validation("Question is required")
            } else {
                tracing::error!(error = %e, "chatbot query failed");
                AppError::internal("Failed to process query")
            }
        })?;

    Ok(Json(QueryResponse { response }))
}

/// GET /chatbot/history - All recorded exchanges, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<ChatRecord>>, AppError> {
    let history = state.chat_service.list_history().await.map_err(|e| {
        tracing::error!(error = %e, "failed to fetch chat history");
        AppError::internal("Failed to fetch chat history")
    })?;

    Ok(Json(history))
}

/// DELETE /chatbot/history - Remove every exchange unconditionally.
pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, AppError> {
    let deleted = state.chat_service.clear_history().await.map_err(|e| {
        tracing::error!(error = %e, "failed to delete chat history");
        AppError::internal("Failed to delete chat history")
    })?;

    Ok(Json(ClearResponse {
        message: format!("Deleted {deleted} chat entries"),
    }))
}
