use crate::ai::{AiResult, ChatSession, LanguageModel};
use crate::ids::IdGenerator;
use crate::prompts::{Region, analyst_instruction, connection_apology};
use crate::types::{ChatMessage, Report, Role};
use std::sync::{Arc, Weak};
use time::OffsetDateTime;
use tokio::sync::Mutex;

pub const GREETING_ID: &str = "0";

/// Result of a resolved turn, still bound to the turn that produced it.
#[derive(Debug)]
pub struct TurnOutcome {
    result: AiResult<String>,
    ticket: Arc<()>,
}

impl TurnOutcome {
    pub fn result(&self) -> &AiResult<String> {
        &self.result
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPhase {
    #[default]
    Idle,
    Pending,
}

/// Chat with the incident analyst.
///
/// A turn runs in two phases: [`AnalystChat::begin_turn`] appends the user's
/// message and hands back a [`PendingTurn`]; once that resolves,
/// [`AnalystChat::finish_turn`] appends exactly one model message (the reply
/// or an apology). While a turn is pending new turns are refused.
///
/// The session, and with it the report snapshot in its system instruction, is
/// created on the first turn and kept for the life of the chat. Reports filed
/// afterwards are not visible to the analyst.
///
/// A turn whose [`PendingTurn`] is dropped before it finishes counts as
/// failed: the next call to [`AnalystChat::begin_turn`] appends the apology
/// and the chat is usable again.
pub struct AnalystChat {
    model: Arc<dyn LanguageModel>,
    region: Region,
    session: Option<Arc<Mutex<ChatSession>>>,
    messages: Vec<ChatMessage>,
    in_flight: Option<Weak<()>>,
    ids: IdGenerator,
}

/// A turn whose request has not been sent yet. Resolving it does not touch
/// the chat log.
pub struct PendingTurn {
    session: AiResult<Arc<Mutex<ChatSession>>>,
    message: String,
    ticket: Arc<()>,
}

impl PendingTurn {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub async fn resolve(self) -> TurnOutcome {
        let result = match self.session {
            Ok(session) => {
                let mut session = session.lock().await;
                session.send_message(&self.message).await
            }
            Err(err) => Err(err),
        };
        TurnOutcome {
            result,
            ticket: self.ticket,
        }
    }

    /// Settle the turn with a result obtained elsewhere.
    pub fn complete(self, result: AiResult<String>) -> TurnOutcome {
        TurnOutcome {
            result,
            ticket: self.ticket,
        }
    }
}

impl AnalystChat {
    pub fn new(model: Arc<dyn LanguageModel>, region: Region) -> Self {
        let greeting = ChatMessage {
            id: GREETING_ID.to_string(),
            role: Role::Model,
            text: region.welcome.to_string(),
            timestamp: OffsetDateTime::now_utc(),
        };
        Self {
            model,
            region,
            session: None,
            messages: vec![greeting],
            in_flight: None,
            ids: IdGenerator::default(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> TurnPhase {
        match &self.in_flight {
            Some(ticket) if ticket.strong_count() > 0 => TurnPhase::Pending,
            _ => TurnPhase::Idle,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.phase() == TurnPhase::Pending
    }

    /// Close out a turn that was dropped before it finished by appending the
    /// apology. Returns `true` if there was one.
    pub fn settle_abandoned_turn(&mut self) -> bool {
        let abandoned = self
            .in_flight
            .as_ref()
            .is_some_and(|ticket| ticket.strong_count() == 0);
        if abandoned {
            tracing::warn!("analyst turn dropped before it finished");
            self.in_flight = None;
            self.push(Role::Model, connection_apology(&self.region));
        }
        abandoned
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// System instruction of the live session, if one has been created.
    pub async fn session_instruction(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        let session = session.lock().await;
        Some(session.system_instruction().to_string())
    }

    /// Start a turn. Returns `None`, leaving the log unchanged, when the input
    /// is blank or another turn is still pending.
    pub fn begin_turn(&mut self, input: &str, reports: &[Report]) -> Option<PendingTurn> {
        if input.trim().is_empty() {
            return None;
        }
        self.settle_abandoned_turn();
        if self.is_pending() {
            tracing::debug!("analyst turn already in flight; ignoring send");
            return None;
        }

        self.push(Role::User, input.to_string());
        let session = self.ensure_session(reports);
        let ticket = Arc::new(());
        self.in_flight = Some(Arc::downgrade(&ticket));

        Some(PendingTurn {
            session,
            message: input.to_string(),
            ticket,
        })
    }

    /// Complete the pending turn with its outcome. Returns `false` if the
    /// outcome does not belong to the turn in flight.
    pub fn finish_turn(&mut self, outcome: TurnOutcome) -> bool {
        let current = self
            .in_flight
            .as_ref()
            .is_some_and(|ticket| Weak::ptr_eq(ticket, &Arc::downgrade(&outcome.ticket)));
        if !current {
            tracing::warn!("finish_turn called with an outcome from another turn");
            return false;
        }

        let text = match outcome.result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "analyst turn failed");
                connection_apology(&self.region)
            }
        };
        self.push(Role::Model, text);
        self.in_flight = None;
        true
    }

    /// Run a whole turn. Returns `false` if the send was refused.
    pub async fn send(&mut self, input: &str, reports: &[Report]) -> bool {
        let Some(turn) = self.begin_turn(input, reports) else {
            return false;
        };
        let outcome = turn.resolve().await;
        self.finish_turn(outcome)
    }

    fn ensure_session(&mut self, reports: &[Report]) -> AiResult<Arc<Mutex<ChatSession>>> {
        if let Some(session) = &self.session {
            return Ok(Arc::clone(session));
        }

        let instruction = analyst_instruction(&self.region, reports)?;
        tracing::info!(
            reports = reports.len(),
            model = self.model.model_name(),
            "starting analyst session"
        );
        let session = Arc::new(Mutex::new(ChatSession::new(
            Arc::clone(&self.model),
            instruction,
        )));
        self.session = Some(Arc::clone(&session));
        Ok(session)
    }

    fn push(&mut self, role: Role, text: String) {
        let now = OffsetDateTime::now_utc();
        self.messages.push(ChatMessage {
            id: self.ids.next_at(now),
            role,
            text,
            timestamp: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::UnconfiguredModel;
    use crate::prompts::ZIMBABWE;

    #[test]
    fn starts_with_greeting() {
        let chat = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].id, GREETING_ID);
        assert_eq!(chat.messages()[0].role, Role::Model);
        assert!(!chat.has_session());
    }

    #[test]
    fn blank_input_is_refused() {
        let mut chat = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        assert!(chat.begin_turn("   ", &[]).is_none());
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.phase(), TurnPhase::Idle);
    }

    #[test]
    fn outcome_of_another_chat_is_ignored() {
        let mut chat = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        let mut other = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        let _own = chat.begin_turn("mine", &[]).unwrap();
        let stray = other.begin_turn("theirs", &[]).unwrap();

        assert!(!chat.finish_turn(stray.complete(Ok("stray".to_string()))));
        assert_eq!(chat.messages().len(), 2);
        assert!(chat.is_pending());
    }

    #[test]
    fn dropped_turn_settles_with_apology() {
        let mut chat = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        let turn = chat.begin_turn("hello?", &[]).unwrap();
        assert!(chat.is_pending());

        drop(turn);
        assert_eq!(chat.phase(), TurnPhase::Idle);
        assert!(chat.settle_abandoned_turn());
        assert!(!chat.settle_abandoned_turn());

        let last = chat.messages().last().unwrap();
        assert_eq!(last.role, Role::Model);
        assert_eq!(last.text, connection_apology(&ZIMBABWE));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn input_is_kept_as_typed() {
        let mut chat = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        let turn = chat.begin_turn("  Hello\n", &[]).unwrap();
        assert_eq!(turn.message(), "  Hello\n");
        assert_eq!(chat.messages()[1].text, "  Hello\n");
    }

    #[test]
    fn ids_stay_unique_within_one_instant() {
        let mut chat = AnalystChat::new(Arc::new(UnconfiguredModel), ZIMBABWE);
        let turn = chat.begin_turn("one", &[]).unwrap();
        chat.finish_turn(turn.complete(Ok("a".to_string())));
        let turn = chat.begin_turn("two", &[]).unwrap();
        chat.finish_turn(turn.complete(Ok("b".to_string())));

        let mut ids: Vec<&str> = chat.messages().iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
