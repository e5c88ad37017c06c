use thiserror::Error;

/// Errors from repository operations (used by trait definitions in leafline-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the text-generation collaborator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("failed to parse provider response: {0}")]
    Deserialization(String),
}

/// Errors from the product-search collaborator.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search provider error: {0}")]
    Provider(String),

    #[error("failed to parse search response: {0}")]
    Deserialization(String),
}

/// Service-level error for the chat history operations.
///
/// The HTTP layer maps `Validation` to 400 and everything else to 500 with
/// a generic message; callers never see which collaborator failed.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ChatError {
    /// Whether this error is the caller's fault (bad input) rather than a
    /// collaborator failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("no such table".to_string());
        assert_eq!(err.to_string(), "query error: no such table");
    }

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::Provider("HTTP 503".to_string());
        assert!(err.to_string().contains("HTTP 503"));
    }

    #[test]
    fn test_chat_error_from_generation() {
        let err: ChatError = GenerationError::RateLimited.into();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_chat_error_validation() {
        let err = ChatError::Validation("question is required".to_string());
        assert!(err.is_validation());
    }
}
