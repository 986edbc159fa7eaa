//! Wire types for the answering service.
//!
//! `GET /chatbot` mints a session; `POST /ask` answers a question within
//! one. Per-answer source citations carry a required `source` and optional
//! `page`/`type`.

use prospect_core::Citation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub session_id: &'a str,
    pub question: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<WireCitation>,
}

#[derive(Debug, Deserialize)]
pub struct WireCitation {
    pub source: String,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl From<WireCitation> for Citation {
    fn from(wire: WireCitation) -> Self {
        Citation {
            source_id: wire.source,
            page: wire.page,
            kind: wire.kind,
        }
    }
}

/// One resolved answer, converted out of the wire shape.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub sources: Vec<Citation>,
}

impl From<AskResponse> for Answer {
    fn from(resp: AskResponse) -> Self {
        Answer {
            text: resp.response,
            sources: resp.sources.into_iter().map(Citation::from).collect(),
        }
    }
}
