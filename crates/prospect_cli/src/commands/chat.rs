//! `prospect chat` — the interactive loop.
//!
//! One question in flight at a time. Input typed before the session is
//! ready is queued, not lost; a failed bootstrap leaves the loop usable
//! with `/retry`.

use std::io::{BufRead, Write};

use anyhow::Result;
use console::style;
use prospect_chat::{Conversation, ConversationState, Submission};
use prospect_client::HttpAnswerService;
use prospect_core::SessionStore;

use crate::output;

const HELP: &str = "\
/help   show this help
/reset  forget the conversation and start a fresh session
/retry  reconnect to the answering service
/quit   leave the chat";

pub async fn handle(api_url: Option<String>) -> Result<()> {
    let service = HttpAnswerService::new(super::client_config(api_url));
    let mut conversation = Conversation::new(service);
    match SessionStore::default_location() {
        Ok(store) => conversation = conversation.with_store(store),
        Err(e) => tracing::warn!(error = %e, "session persistence disabled"),
    }

    output::dim("Ask anything about admissions. Type /help for commands, /quit to leave.");
    connect(&mut conversation).await;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt();
        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = line.trim();

        match input {
            "/quit" | "/exit" => break,
            "/help" => {
                output::dim(HELP);
                continue;
            }
            "/reset" => {
                conversation.reset();
                output::dim("conversation cleared");
                connect(&mut conversation).await;
                continue;
            }
            "/retry" => {
                connect(&mut conversation).await;
                continue;
            }
            _ => {}
        }

        match conversation.begin(input) {
            Submission::Accepted { pending, question } => {
                exchange(&mut conversation, pending, &question).await;
            }
            Submission::Queued => {
                output::dim("not connected yet; your question is queued (/retry to reconnect)");
            }
            Submission::Empty | Submission::Ignored => {}
        }
    }
    Ok(())
}

fn prompt() {
    print!("{} ", style("you>").green().bold());
    let _ = std::io::stdout().flush();
}

async fn exchange<S: prospect_client::AnswerService>(
    conversation: &mut Conversation<S>,
    pending: prospect_core::TurnId,
    question: &str,
) {
    let spinner = output::spinner("thinking...");
    conversation.send(pending, question).await;
    spinner.finish_and_clear();
    if let Some(turn) = conversation.history().iter().rev().find(|t| t.id == pending) {
        output::render_answer(&turn.text, &turn.sources);
    }
}

/// Bootstrap the session and flush any question queued while offline.
async fn connect<S: prospect_client::AnswerService>(conversation: &mut Conversation<S>) {
    if conversation.state() != ConversationState::Uninitialized {
        return;
    }
    let spinner = output::spinner("connecting...");
    let outcome = conversation.bootstrap().await;
    spinner.finish_and_clear();
    match outcome {
        Ok(()) => {
            if let Some(queued) = conversation.take_queued() {
                if let Submission::Accepted { pending, question } = conversation.begin(&queued) {
                    exchange(conversation, pending, &question).await;
                }
            }
        }
        Err(e) => {
            output::error(&format!("could not reach the answering service: {e}"));
            output::dim("type /retry to reconnect, or /quit to leave");
        }
    }
}
