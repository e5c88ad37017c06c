//! Serializable conversation state for the chat widget.
//!
//! Owns everything the UI layer needs to render a conversation -- the
//! message list, the loading flag, the selected display language, and the
//! history-visibility toggle -- with no dependency on any rendering
//! mechanism. Purely local and ephemeral; the durable history lives behind
//! the chat service.

use leafline_types::chat::ChatRecord;
use serde::{Deserialize, Serialize};

/// Opening message shown when a conversation starts or resets.
pub const GREETING: &str = "Hello! I'm your organic farming assistant. How can I help you \
     with organic products, farming practices, or IoT-based verification today?";

/// Shown for any collaborator failure; the conversation stays usable.
pub const APOLOGY: &str = "Sorry, something went wrong.";

/// One rendered message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiMessage {
    pub text: String,
    pub from_bot: bool,
}

/// The whole client-side conversation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub messages: Vec<UiMessage>,
    pub loading: bool,
    /// Selected display language (ISO 639-1 code, "en" by default).
    pub language: String,
    pub show_history: bool,
}

impl SessionState {
    /// Fresh session opening with the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![UiMessage {
                text: GREETING.to_string(),
                from_bot: true,
            }],
            loading: false,
            language: "en".to_string(),
            show_history: false,
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(UiMessage {
            text: text.into(),
            from_bot: false,
        });
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(UiMessage {
            text: text.into(),
            from_bot: true,
        });
    }

    /// Replace the message list with the persisted history, flattening each
    /// record into a user/bot pair.
    pub fn load_history(&mut self, records: &[ChatRecord]) {
        self.messages = records
            .iter()
            .flat_map(|r| {
                [
                    UiMessage {
                        text: r.question.clone(),
                        from_bot: false,
                    },
                    UiMessage {
                        text: r.response.clone(),
                        from_bot: true,
                    },
                ]
            })
            .collect();
    }

    /// Start over: greeting only, history panel closed.
    pub fn reset(&mut self) {
        self.messages = vec![UiMessage {
            text: GREETING.to_string(),
            from_bot: true,
        }];
        self.show_history = false;
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_greets() {
        let state = SessionState::new();
        assert_eq!(state.messages.len(), 1);
        assert!(state.messages[0].from_bot);
        assert_eq!(state.messages[0].text, GREETING);
        assert!(!state.loading);
        assert!(!state.show_history);
        assert_eq!(state.language, "en");
    }

    #[test]
    fn load_history_flattens_records() {
        let mut state = SessionState::new();
        let records = vec![
            ChatRecord::new("q1".to_string(), "r1".to_string()),
            ChatRecord::new("q2".to_string(), "r2".to_string()),
        ];

        state.load_history(&records);

        let texts: Vec<(&str, bool)> = state
            .messages
            .iter()
            .map(|m| (m.text.as_str(), m.from_bot))
            .collect();
        assert_eq!(
            texts,
            [("q1", false), ("r1", true), ("q2", false), ("r2", true)]
        );
    }

    #[test]
    fn reset_restores_greeting_and_closes_history() {
        let mut state = SessionState::new();
        state.push_user("hello");
        state.push_bot("hi");
        state.toggle_history();
        assert!(state.show_history);

        state.reset();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].text, GREETING);
        assert!(!state.show_history);
    }

    #[test]
    fn state_round_trips_through_serde() {
        let mut state = SessionState::new();
        state.push_user("hola");
        state.language = "es".to_string();

        let json = serde_json::to_string(&state).unwrap();
        let restored: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.messages, state.messages);
        assert_eq!(restored.language, "es");
    }
}
