//! Conversation controller: owns the history and serializes the exchange.
//!
//! States run `Uninitialized -> Ready -> AwaitingResponse -> Ready`; a failed
//! ask replaces the pending placeholder with a fixed apology turn and returns
//! to `Ready`, so no failure is fatal to the conversation. The synchronous
//! [Conversation::begin] transition is split from the async
//! [Conversation::send] completion so the pending placeholder is observable
//! between the two.

use prospect_client::AnswerService;
use prospect_core::{Citation, SessionId, SessionStore, Turn, TurnId};

/// Shown in place of an answer when the ask fails. Never carries sources.
pub const ERROR_REPLY: &str =
    "Sorry, I ran into a problem answering that. Please try sending your question again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// No session yet; submission is disabled (input is queued, not lost).
    Uninitialized,
    Ready,
    /// Exactly one request in flight; further submissions are ignored.
    AwaitingResponse,
}

/// Outcome of offering input to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Accepted { pending: TurnId, question: String },
    /// Nothing left after trimming.
    Empty,
    /// A request is already in flight; the input is dropped, not queued.
    Ignored,
    /// No session yet; the input is retained for after bootstrap.
    Queued,
}

pub struct Conversation<S> {
    service: S,
    store: Option<SessionStore>,
    session: Option<SessionId>,
    state: ConversationState,
    history: Vec<Turn>,
    next_turn: u64,
    queued: Option<String>,
}

impl<S: AnswerService> Conversation<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            store: None,
            session: None,
            state: ConversationState::Uninitialized,
            history: Vec::new(),
            next_turn: 0,
            queued: None,
        }
    }

    /// Attach durable session storage so a restarted client resumes the
    /// same conversation.
    pub fn with_store(mut self, store: SessionStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session.as_ref()
    }

    /// Input retained while the session was still bootstrapping.
    pub fn take_queued(&mut self) -> Option<String> {
        self.queued.take()
    }

    fn alloc(&mut self) -> TurnId {
        let id = TurnId(self.next_turn);
        self.next_turn += 1;
        id
    }

    /// Acquire a session: stored id first (absence is first use, never an
    /// error), otherwise ask the service for a fresh one and persist it.
    /// Failure leaves the controller `Uninitialized`; queued input survives.
    pub async fn bootstrap(&mut self) -> anyhow::Result<()> {
        if self.state != ConversationState::Uninitialized {
            return Ok(());
        }
        if let Some(id) = self.store.as_ref().and_then(|s| s.load()) {
            tracing::debug!(session_id = %id, "resuming stored session");
            self.session = Some(id);
            self.state = ConversationState::Ready;
            return Ok(());
        }
        match self.service.create_session().await {
            Ok(id) => {
                if let Some(store) = &self.store {
                    if let Err(e) = store.save(&id) {
                        tracing::warn!(error = %e, "could not persist session id");
                    }
                }
                tracing::debug!(session_id = %id, "session created");
                self.session = Some(id);
                self.state = ConversationState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "session bootstrap failed");
                Err(e)
            }
        }
    }

    /// Synchronous half of a submission: trims the input and, when `Ready`,
    /// appends the user turn plus the pending assistant placeholder and
    /// enters `AwaitingResponse`. History is append-only and chronological.
    pub fn begin(&mut self, input: &str) -> Submission {
        let question = input.trim();
        if question.is_empty() {
            return Submission::Empty;
        }
        match self.state {
            ConversationState::Uninitialized => {
                self.queued = Some(question.to_string());
                Submission::Queued
            }
            ConversationState::AwaitingResponse => Submission::Ignored,
            ConversationState::Ready => {
                let user = self.alloc();
                self.history.push(Turn::user(user, question));
                let pending = self.alloc();
                self.history.push(Turn::pending_assistant(pending));
                self.state = ConversationState::AwaitingResponse;
                Submission::Accepted {
                    pending,
                    question: question.to_string(),
                }
            }
        }
    }

    /// Async half: ask the service and resolve the placeholder in place, by
    /// id. Any failure substitutes the fixed apology turn; the state returns
    /// to `Ready` either way.
    pub async fn send(&mut self, pending: TurnId, question: &str) {
        let outcome = match &self.session {
            Some(session) => self.service.ask(question, session).await,
            None => Err(anyhow::anyhow!("no active session")),
        };
        match outcome {
            Ok(answer) => self.resolve(pending, answer.text, answer.sources),
            Err(e) => {
                tracing::warn!(error = %e, "ask failed");
                self.fail(pending);
            }
        }
        self.state = ConversationState::Ready;
    }

    /// One full exchange: [Self::begin] then, when accepted, [Self::send].
    pub async fn submit(&mut self, input: &str) -> Submission {
        let submission = self.begin(input);
        if let Submission::Accepted { pending, question } = &submission {
            self.send(*pending, question).await;
        }
        submission
    }

    /// Clear the history and the persisted session id; the next use
    /// bootstraps a fresh session.
    pub fn reset(&mut self) {
        self.history.clear();
        self.session = None;
        self.queued = None;
        self.state = ConversationState::Uninitialized;
        if let Some(store) = &self.store {
            if let Err(e) = store.clear() {
                tracing::warn!(error = %e, "could not clear stored session");
            }
        }
    }

    fn resolve(&mut self, id: TurnId, text: String, sources: Vec<Citation>) {
        if let Some(turn) = self.history.iter_mut().find(|t| t.id == id) {
            turn.resolve(text, sources);
        }
    }

    fn fail(&mut self, id: TurnId) {
        if let Some(turn) = self.history.iter_mut().find(|t| t.id == id) {
            turn.resolve_error(ERROR_REPLY);
        }
    }
}
