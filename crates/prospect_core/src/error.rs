use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("session error: {0}")]
    Session(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
