//! Remote collaborator interface: the answering service is an opaque network
//! peer with two operations, session bootstrap and ask.

pub mod config;
pub mod error;
pub mod service;
pub mod types;

pub use config::ClientConfig;
pub use error::ClientError;
pub use service::{AnswerService, HttpAnswerService};
pub use types::Answer;
