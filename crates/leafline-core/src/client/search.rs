//! ProductSearch trait and result formatting.

use leafline_types::error::SearchError;
use leafline_types::product::ProductHit;

/// Trait for the product-search collaborator.
///
/// Implementations live in leafline-infra (e.g., `HttpProductSearch`).
pub trait ProductSearch: Send + Sync {
    /// Keyword search, returning matching products (possibly none).
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ProductHit>, SearchError>> + Send;
}

/// Render search results as a markdown message for the conversation.
pub fn format_product_results(query: &str, hits: &[ProductHit]) -> String {
    if hits.is_empty() {
        return format!("No products found for \"{query}\".");
    }

    let list = hits
        .iter()
        .map(|p| format!("- **{}**: {} ({})", p.name, p.price, p.description))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Here are the products I found for \"{query}\":\n{list}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_results_get_a_sentence() {
        assert_eq!(
            format_product_results("kale", &[]),
            "No products found for \"kale\"."
        );
    }

    #[test]
    fn hits_render_as_markdown_list() {
        let hits = vec![
            ProductHit {
                name: "Organic Honey".to_string(),
                price: "$12.50".to_string(),
                description: "Raw wildflower honey".to_string(),
            },
            ProductHit {
                name: "Kale".to_string(),
                price: "$3.00".to_string(),
                description: "Curly, pesticide-free".to_string(),
            },
        ];

        let rendered = format_product_results("greens", &hits);
        assert!(rendered.starts_with("Here are the products I found for \"greens\":\n"));
        assert!(rendered.contains("- **Organic Honey**: $12.50 (Raw wildflower honey)"));
        assert!(rendered.contains("- **Kale**: $3.00 (Curly, pesticide-free)"));
    }
}
