//! Application state wiring the service to its concrete collaborators.
//!
//! AppState holds the chat service used by both the CLI and the REST API.
//! The service is generic over repository/generator traits; AppState pins
//! the repository to the SQLite implementation and type-erases the
//! generator so tests can substitute a stub.

use std::sync::Arc;

use leafline_core::chat::service::ChatService;
use leafline_core::generate::BoxTextGenerator;
use leafline_infra::config::{database_url, generation_api_key, load_config, resolve_data_dir};
use leafline_infra::llm::gemini::GeminiGenerator;
use leafline_infra::sqlite::chat::SqliteChatRepository;
use leafline_infra::sqlite::pool::DatabasePool;
use leafline_types::config::AppConfig;
use secrecy::SecretString;

/// Concrete service type pinned to the infra repository.
pub type ConcreteChatService = ChatService<SqliteChatRepository, BoxTextGenerator>;

/// Shared application state used by CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: AppConfig,
}

impl AppState {
    /// Wire a state from already-constructed parts.
    pub fn new(chat_service: ConcreteChatService, config: AppConfig) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
            config,
        }
    }

    /// Initialize the application state: load config, connect to the
    /// database, build the generation client.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;

        // A missing key is not fatal at startup: history and clear still
        // work, and generation calls fail with an auth error at call time.
        let api_key = generation_api_key().unwrap_or_else(|| {
            tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
            SecretString::from("")
        });

        let mut generator = GeminiGenerator::new(api_key, config.generation.model.clone())?;
        if let Some(base_url) = &config.generation.base_url {
            generator = generator.with_base_url(base_url.clone());
        }

        let chat_repo = SqliteChatRepository::new(db_pool);
        let chat_service = ChatService::new(chat_repo, BoxTextGenerator::new(generator));

        Ok(Self::new(chat_service, config))
    }
}
