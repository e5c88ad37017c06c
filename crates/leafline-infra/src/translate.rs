//! MyMemoryTranslator -- concrete [`Translator`] for the MyMemory API.
//!
//! Best-effort: any network or parse failure returns the original text, and
//! same-language requests skip the network entirely.

use std::time::Duration;

use serde::Deserialize;

use leafline_core::client::translate::Translator;

/// Client for the MyMemory translation endpoint
/// (`GET {endpoint}?q=...&langpair=source|target`).
pub struct MyMemoryTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl MyMemoryTranslator {
    pub fn new(endpoint: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default();
        Self { client, endpoint }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl Translator for MyMemoryTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> String {
        if source == target {
            return text.to_string();
        }

        let langpair = format!("{source}|{target}");
        let result = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "translation request failed, keeping original text");
                return text.to_string();
            }
        };

        match response.json::<TranslateResponse>().await {
            Ok(parsed) => parsed
                .response_data
                .translated_text
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| text.to_string()),
            Err(e) => {
                tracing::debug!(error = %e, "translation response unreadable, keeping original text");
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_language_short_circuits() {
        // Endpoint is unreachable; a network attempt would fail, so this
        // passing proves the call never leaves the process.
        let translator = MyMemoryTranslator::new("http://127.0.0.1:1".to_string());
        let out = translator.translate("hello", "en", "en").await;
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back_to_original() {
        let translator = MyMemoryTranslator::new("http://127.0.0.1:1".to_string());
        let out = translator.translate("hello", "en", "hi").await;
        assert_eq!(out, "hello");
    }

    #[test]
    fn response_parses_translated_text() {
        let raw = r#"{"responseData": {"translatedText": "hola"}, "responseStatus": 200}"#;
        let parsed: TranslateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.response_data.translated_text.as_deref(), Some("hola"));
    }
}
