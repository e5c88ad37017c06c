//! HttpProductSearch -- concrete [`ProductSearch`] over the external
//! product-search endpoint (`GET {base}/search/products?query=...`).

use std::time::Duration;

use leafline_core::client::search::ProductSearch;
use leafline_types::error::SearchError;
use leafline_types::product::ProductHit;

/// HTTP client for the product-search collaborator.
pub struct HttpProductSearch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSearch {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default();
        Self { client, base_url }
    }

    fn url(&self) -> String {
        format!("{}/search/products", self.base_url)
    }
}

impl ProductSearch for HttpProductSearch {
    async fn search(&self, query: &str) -> Result<Vec<ProductHit>, SearchError> {
        let response = self
            .client
            .get(self.url())
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| SearchError::Provider(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(SearchError::Provider(format!("HTTP {status}: {error_body}")));
        }

        response
            .json::<Vec<ProductHit>>()
            .await
            .map_err(|e| SearchError::Deserialization(format!("failed to parse response: {e}")))
    }
}
