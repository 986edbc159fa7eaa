//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

/// Terminal chat client for the admissions answering service
#[derive(Parser)]
#[command(name = "prospect", about, version, propagate_version = true)]
pub struct Cli {
    /// Defaults to the interactive chat when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive chat session
    Chat {
        /// Answering service base URL. Uses PROSPECT_API_URL env if not set.
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        question: String,
        /// Answering service base URL. Uses PROSPECT_API_URL env if not set.
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Inspect or reset the stored session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show the stored session id, if any
    Show,
    /// Forget the stored session so the next chat starts fresh
    Reset,
}
