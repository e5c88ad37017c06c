//! Configuration loader for Leafline.
//!
//! Reads `config.toml` from the data directory (`~/.leafline/` in
//! production, overridable via `LEAFLINE_DATA_DIR`) and deserializes it
//! into [`AppConfig`]. Falls back to defaults when the file is missing or
//! malformed. The generation API key comes from the `GEMINI_API_KEY`
//! environment variable, never from the config file.

use std::path::{Path, PathBuf};

use leafline_types::config::AppConfig;
use secrecy::SecretString;

/// Resolve the data directory: `LEAFLINE_DATA_DIR` env var, falling back
/// to `~/.leafline`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LEAFLINE_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".leafline")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`AppConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// The generation API key from the environment, if set.
pub fn generation_api_key() -> Option<SecretString> {
    std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
}

/// Database URL for the service's SQLite file in the data directory.
pub fn database_url(data_dir: &Path) -> String {
    format!("sqlite://{}?mode=rwc", data_dir.join("leafline.db").display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
        assert_eq!(config.generation.model, "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
[server]
bind_addr = "0.0.0.0:8080"
allowed_origin = "https://shop.example.com"

[generation]
model = "gemini-1.5-pro"
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.server.allowed_origin, "https://shop.example.com");
        assert_eq!(config.generation.model, "gemini-1.5-pro");
        // Untouched section keeps its defaults
        assert_eq!(config.client.working_language, "en");
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn database_url_points_into_data_dir() {
        let url = database_url(Path::new("/tmp/leafline"));
        assert_eq!(url, "sqlite:///tmp/leafline/leafline.db?mode=rwc");
    }
}
