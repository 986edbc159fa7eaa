//! Conversation state machine over a [prospect_client::AnswerService].

pub mod conversation;

pub use conversation::{Conversation, ConversationState, Submission, ERROR_REPLY};
