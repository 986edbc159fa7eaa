use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// Stable per-turn identifier. Monotonic within one conversation, so the
/// pending placeholder can be replaced by id rather than by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(pub u64);

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One source reference attached to an assistant answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub source_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Citation {
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            page: None,
            kind: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// One message in a conversation's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub id: TurnId,
    pub role: Role,
    pub text: String,
    pub sources: Vec<Citation>,
    pub pending: bool,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn user(id: TurnId, text: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            text: text.into(),
            sources: Vec::new(),
            pending: false,
            timestamp: Utc::now(),
        }
    }

    /// Placeholder appended when a question goes out; resolved in place later.
    pub fn pending_assistant(id: TurnId) -> Self {
        Self {
            id,
            role: Role::Assistant,
            text: String::new(),
            sources: Vec::new(),
            pending: true,
            timestamp: Utc::now(),
        }
    }

    /// Fill in the answer text and its citations; the turn stops being pending.
    pub fn resolve(&mut self, text: impl Into<String>, sources: Vec<Citation>) {
        self.text = text.into();
        self.sources = sources;
        self.pending = false;
        self.timestamp = Utc::now();
    }

    /// Replace the placeholder with a fixed error reply. Never carries sources.
    pub fn resolve_error(&mut self, text: impl Into<String>) {
        self.resolve(text, Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"user\"");

        let decoded: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(decoded, Role::Assistant);
    }

    #[test]
    fn test_citation_builder() {
        let c = Citation::new("faq.pdf").with_page(3).with_kind("pdf");
        assert_eq!(c.source_id, "faq.pdf");
        assert_eq!(c.page, Some(3));
        assert_eq!(c.kind.as_deref(), Some("pdf"));
    }

    #[test]
    fn test_citation_serialization_skips_absent_fields() {
        let json = serde_json::to_string(&Citation::new("faq.pdf")).unwrap();
        assert!(!json.contains("page"));
        assert!(!json.contains("kind"));

        let json = serde_json::to_string(&Citation::new("faq.pdf").with_page(1)).unwrap();
        assert!(json.contains("\"page\":1"));
    }

    #[test]
    fn test_user_turn() {
        let turn = Turn::user(TurnId(0), "hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text, "hello");
        assert!(!turn.pending);
        assert!(turn.sources.is_empty());
    }

    #[test]
    fn test_pending_assistant_turn() {
        let turn = Turn::pending_assistant(TurnId(1));
        assert_eq!(turn.role, Role::Assistant);
        assert!(turn.pending);
        assert!(turn.text.is_empty());
    }

    #[test]
    fn test_resolve_clears_pending() {
        let mut turn = Turn::pending_assistant(TurnId(1));
        turn.resolve("answer", vec![Citation::new("faq.pdf").with_page(2)]);
        assert!(!turn.pending);
        assert_eq!(turn.text, "answer");
        assert_eq!(turn.sources.len(), 1);
    }

    #[test]
    fn test_resolve_error_has_no_sources() {
        let mut turn = Turn::pending_assistant(TurnId(1));
        turn.sources.push(Citation::new("stale.pdf"));
        turn.resolve_error("sorry");
        assert!(!turn.pending);
        assert!(turn.sources.is_empty());
    }

    #[test]
    fn test_turn_serialization_round_trip() {
        let turn = Turn::user(TurnId(7), "what are the eligibility criteria?");
        let json = serde_json::to_string(&turn).unwrap();
        let decoded: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, TurnId(7));
        assert_eq!(decoded.role, Role::User);
        assert_eq!(decoded.text, turn.text);
    }
}
