//! Answering service trait + reqwest implementation.

use std::time::Duration;

use anyhow::Result;
use prospect_core::SessionId;
use tokio::time::timeout;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{Answer, AskRequest, AskResponse, SessionResponse};

#[async_trait::async_trait]
pub trait AnswerService: Send + Sync {
    async fn create_session(&self) -> Result<SessionId>;
    async fn ask(&self, question: &str, session: &SessionId) -> Result<Answer>;
}

/// HTTP client for the answering service. Every call runs under a bounded
/// timeout; a hung request becomes an error rather than an open-ended wait.
pub struct HttpAnswerService {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpAnswerService {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let deadline = Duration::from_secs(self.config.timeout_secs);
        let response = timeout(deadline, request.send())
            .await
            .map_err(|_| ClientError::Timeout(self.config.timeout_secs))??;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl AnswerService for HttpAnswerService {
    async fn create_session(&self) -> Result<SessionId> {
        let url = format!("{}/chatbot", self.config.base_url.trim_end_matches('/'));
        let body = self.send(self.client.get(&url)).await?;
        let resp: SessionResponse = serde_json::from_str(&body).map_err(ClientError::from)?;
        tracing::debug!(session_id = %resp.session_id, "session created");
        Ok(SessionId::new(resp.session_id))
    }

    async fn ask(&self, question: &str, session: &SessionId) -> Result<Answer> {
        let url = format!("{}/ask", self.config.base_url.trim_end_matches('/'));
        let request = self.client.post(&url).json(&AskRequest {
            session_id: session.as_str(),
            question,
        });
        let body = self.send(request).await?;
        let resp: AskResponse = serde_json::from_str(&body).map_err(ClientError::from)?;
        tracing::debug!(
            session_id = %session,
            sources = resp.sources.len(),
            "answer received"
        );
        Ok(Answer::from(resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_for(server: &mockito::ServerGuard) -> HttpAnswerService {
        HttpAnswerService::new(ClientConfig::new(server.url()).with_timeout(5))
    }

    #[tokio::test]
    async fn create_session_parses_id() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/chatbot")
            .with_status(200)
            .with_body(r#"{"session_id":"s-123"}"#)
            .create_async()
            .await;

        let session = service_for(&server).create_session().await.unwrap();
        assert_eq!(session.as_str(), "s-123");
    }

    #[tokio::test]
    async fn ask_returns_answer_with_sources() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/ask")
            .with_status(200)
            .with_body(
                r#"{"response":"60 seats","sources":[{"source":"seat_matrix.pdf","page":3}]}"#,
            )
            .create_async()
            .await;

        let answer = service_for(&server)
            .ask("how many seats?", &SessionId::new("s-123"))
            .await
            .unwrap();
        assert_eq!(answer.text, "60 seats");
        assert_eq!(answer.sources.len(), 1);
        assert_eq!(answer.sources[0].source_id, "seat_matrix.pdf");
    }

    #[tokio::test]
    async fn non_success_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/ask")
            .with_status(404)
            .with_body("Session ID not found.")
            .create_async()
            .await;

        let err = service_for(&server)
            .ask("anything", &SessionId::new("stale"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn malformed_body_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/chatbot")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        assert!(service_for(&server).create_session().await.is_err());
    }
}
