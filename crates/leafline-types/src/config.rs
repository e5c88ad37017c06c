//! Application configuration structures.
//!
//! Loaded from `config.toml` in the data directory by `leafline-infra`.
//! Every field has a default so a missing or partial file still yields a
//! usable configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Leafline service and CLI client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// The single origin allowed by CORS.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            allowed_origin: default_allowed_origin(),
        }
    }
}

/// Text-generation collaborator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Model identifier passed to the generation API.
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the generation API base URL (testing, proxies).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
        }
    }
}

/// Settings for the client-side collaborators (translation, product search).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Translation collaborator endpoint.
    #[serde(default = "default_translation_endpoint")]
    pub translation_endpoint: String,
    /// Base URL of the product-search collaborator.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// The language the service works in; messages in other languages are
    /// translated into this one before submission.
    #[serde(default = "default_working_language")]
    pub working_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            translation_endpoint: default_translation_endpoint(),
            search_base_url: default_search_base_url(),
            working_language: default_working_language(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_allowed_origin() -> String {
    "http://localhost:5174".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_translation_endpoint() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_search_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_working_language() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_complete() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.server.allowed_origin, "http://localhost:5174");
        assert_eq!(config.generation.model, "gemini-1.5-flash");
        assert!(config.generation.base_url.is_none());
        assert_eq!(config.client.working_language, "en");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[server]
bind_addr = "0.0.0.0:8080"
"#,
        )
        .unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        // Unspecified fields fall back to defaults
        assert_eq!(config.server.allowed_origin, "http://localhost:5174");
        assert_eq!(config.generation.model, "gemini-1.5-flash");
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
    }
}
