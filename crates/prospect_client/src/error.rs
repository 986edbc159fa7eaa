use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = ClientError::Timeout(60);
        assert_eq!(err.to_string(), "request timed out after 60s");
    }

    #[test]
    fn test_status_display() {
        let err = ClientError::Status {
            status: 404,
            body: "Session ID not found.".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Session ID not found."));
    }
}
