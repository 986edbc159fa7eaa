//! `prospect ask` — one question, one answer, exit.

use anyhow::Result;
use prospect_client::{AnswerService, HttpAnswerService};
use prospect_core::SessionStore;

use crate::output;

pub async fn handle(question: &str, api_url: Option<String>) -> Result<()> {
    let service = HttpAnswerService::new(super::client_config(api_url));

    // Reuse the stored session when one exists so consecutive asks keep
    // their conversational context; errors here propagate as a nonzero exit.
    let store = SessionStore::default_location()?;
    let session = match store.load() {
        Some(session) => session,
        None => {
            let session = service.create_session().await?;
            if let Err(e) = store.save(&session) {
                tracing::warn!(error = %e, "could not persist session id");
            }
            session
        }
    };

    let spinner = output::spinner("thinking...");
    let answer = service.ask(question, &session).await;
    spinner.finish_and_clear();

    let answer = answer?;
    output::render_answer(&answer.text, &answer.sources);
    Ok(())
}
