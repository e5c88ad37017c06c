//! Fixed instruction prompt for the generation collaborator.
//!
//! Topic policy is enforced entirely by the generator's adherence to this
//! prompt; the service performs no topic filtering of its own.

/// Substituted when the generator returns empty text.
pub const FALLBACK_RESPONSE: &str = "Sorry, I couldn't generate a response.";

/// The refusal sentence the generator is instructed to use for off-topic
/// questions.
pub const REFUSAL_SENTENCE: &str = "I'm sorry, I can only assist with questions related to \
     organic farming, IoT-based verification, and purchasing organic products.";

/// Build the full prompt embedding the caller's question.
pub fn build_prompt(question: &str) -> String {
    format!(
        "You are an AI assistant for an e-commerce platform specializing in organic \
         products. Your role is to assist consumers with product-related queries, explain \
         organic farming practices, provide information about IoT-based verification, and \
         help consumers make informed purchasing decisions.\n\n\
         **Rules:**\n\
         1. If the question is unrelated to organic farming, IoT-based verification, or \
         purchasing organic products, respond ONLY with: \"{REFUSAL_SENTENCE}\"\n\
         2. Do not provide any additional information or engage in off-topic conversations.\n\
         3. Do not suggest or offer anything outside the domain (e.g., drinks, unrelated facts).\n\n\
         Answer this question: {question}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_question_verbatim() {
        let prompt = build_prompt("What is organic certification?");
        assert!(prompt.ends_with("Answer this question: What is organic certification?"));
    }

    #[test]
    fn prompt_carries_refusal_sentence() {
        let prompt = build_prompt("anything");
        assert!(prompt.contains(REFUSAL_SENTENCE));
    }
}
