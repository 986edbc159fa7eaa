//! Message formatting pipeline: raw answer text to typed content blocks
//! with inline span markup. No external parser crate; answers from the
//! service use a small, stable markdown-ish subset that a line-oriented
//! scanner covers exactly.

pub mod block;
pub mod inline;
pub mod line;
