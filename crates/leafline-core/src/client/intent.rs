//! Intent classification for incoming user messages.
//!
//! The decision boundary: a message containing "search for" or "find"
//! (case-insensitive) is a product search, with the keywords stripped to
//! form the query; everything else is a question for the chat service.
//! A search phrase that strips down to nothing falls back to a question.

const SEARCH_KEYWORDS: [&str; 2] = ["search for", "find"];

/// What the user wants from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Forward the message to the chat service as a question.
    AskQuestion,
    /// Route to the product-search collaborator with the extracted query.
    SearchProduct { query: String },
}

/// Classify a user message into an [`Intent`].
pub fn classify(message: &str) -> Intent {
    let earliest = |text: &str| {
        SEARCH_KEYWORDS
            .iter()
            .filter_map(|kw| find_ci(text, kw))
            .min()
    };

    if earliest(message).is_none() {
        return Intent::AskQuestion;
    }

    // Strip every keyword occurrence, preserving the rest of the message
    // as the query.
    let mut query = String::with_capacity(message.len());
    let mut rest = message;
    while let Some((at, len)) = earliest(rest) {
        query.push_str(&rest[..at]);
        rest = &rest[at + len..];
    }
    query.push_str(rest);

    // Stripping can leave doubled spaces where a keyword sat mid-sentence.
    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        Intent::AskQuestion
    } else {
        Intent::SearchProduct { query }
    }
}

/// Case-insensitive substring search returning (byte offset, matched byte
/// length) of the first occurrence. Char-by-char so multi-byte text never
/// produces an offset inside a character.
fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    for (at, _) in haystack.char_indices() {
        let mut matched_len = 0;
        let mut candidate = haystack[at..].chars();
        let mut matches = true;
        for &nc in &needle {
            match candidate.next() {
                Some(hc) if hc.to_lowercase().eq(nc.to_lowercase()) => {
                    matched_len += hc.len_utf8();
                }
                _ => {
                    matches = false;
                    break;
                }
            }
        }
        if matches {
            return Some((at, matched_len));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_question_is_ask() {
        assert_eq!(classify("What is organic certification?"), Intent::AskQuestion);
    }

    #[test]
    fn search_for_extracts_query() {
        assert_eq!(
            classify("search for organic honey"),
            Intent::SearchProduct {
                query: "organic honey".to_string()
            }
        );
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(
            classify("Please FIND heirloom tomatoes"),
            Intent::SearchProduct {
                query: "Please heirloom tomatoes".to_string()
            }
        );
    }

    #[test]
    fn query_keeps_original_casing() {
        assert_eq!(
            classify("Search For Organic Honey"),
            Intent::SearchProduct {
                query: "Organic Honey".to_string()
            }
        );
    }

    #[test]
    fn bare_keyword_falls_back_to_ask() {
        assert_eq!(classify("find"), Intent::AskQuestion);
        assert_eq!(classify("search for  "), Intent::AskQuestion);
    }

    #[test]
    fn multiple_keywords_all_stripped() {
        assert_eq!(
            classify("find search for apples"),
            Intent::SearchProduct {
                query: "apples".to_string()
            }
        );
    }

    #[test]
    fn multibyte_text_never_panics() {
        assert_eq!(
            classify("найди find мёд"),
            Intent::SearchProduct {
                query: "найди мёд".to_string()
            }
        );
    }

    #[test]
    fn find_ci_reports_byte_offsets() {
        assert_eq!(find_ci("Go FIND it", "find"), Some((3, 4)));
        assert_eq!(find_ci("nothing here", "search for"), None);
    }
}
