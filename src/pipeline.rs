//! Conversation-turn pipeline orchestrator.
//!
//! One call per logical turn, stages in fixed order: validate → safety gate
//! (may short-circuit) → render context window → append user turn → compose
//! prompt → model call (timeout-bounded) → sanitize → append assistant turn.
//!
//! The pipeline holds only immutable shared tables and collaborators; all
//! per-conversation state lives in the [`Session`] passed into each call,
//! whose lifecycle the caller owns. Sessions are single-writer — one turn
//! at a time — so independent sessions run concurrently without locking.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, MAX_INPUT_LENGTH};
use crate::coping::CopingAdvisor;
use crate::error::SupportChatError;
use crate::history::Session;
use crate::lexicon::Lexicon;
use crate::oracle::ModelOracle;
use crate::prompt::PromptBuilder;
use crate::safety::SafetyGate;
use crate::sanitize;
use crate::store::TurnStore;
use crate::types::{CrisisVerdict, GenerationParams, Role, TurnRecord, Utterance};

/// Fixed user-visible message returned when the model backend fails or
/// times out. Raw upstream errors never reach the end user.
pub const UNAVAILABLE_FALLBACK: &str = "I'm sorry, I'm having trouble responding right now. Please try again in a moment. I'm still here to listen.";

/// Core pipeline holding the shared, immutable collaborators.
pub struct Pipeline {
    config: Config,
    lexicon: Arc<Lexicon>,
    gate: SafetyGate,
    builder: PromptBuilder,
    advisor: CopingAdvisor,
    oracle: Box<dyn ModelOracle>,
    store: Box<dyn TurnStore>,
}

impl Pipeline {
    /// Wire up the pipeline around a model oracle and a turn store.
    pub fn new(config: Config, oracle: Box<dyn ModelOracle>, store: Box<dyn TurnStore>) -> Self {
        let lexicon = Arc::new(Lexicon::builtin());
        let gate = SafetyGate::new(Arc::clone(&lexicon));
        let advisor = CopingAdvisor::new(Arc::clone(&lexicon));

        Self {
            config,
            lexicon,
            gate,
            builder: PromptBuilder::default(),
            advisor,
            oracle,
            store,
        }
    }

    /// Session-opening greeting line from the lexicon.
    pub fn greeting(&self) -> &str {
        self.lexicon.greeting()
    }

    /// Suggest a coping technique for a named emotional state.
    pub fn suggest_coping(&self, emotion: &str) -> &'static str {
        self.advisor.suggest(emotion)
    }

    /// Process one conversation turn and return the assistant's reply text.
    ///
    /// A crisis verdict short-circuits before history is touched and the
    /// model is never called. An upstream failure or timeout yields the
    /// fixed [`UNAVAILABLE_FALLBACK`] — the user turn stays in history, the
    /// assistant turn is not appended and not persisted.
    ///
    /// # Errors
    /// Returns [`SupportChatError::InputValidation`] for empty or oversized
    /// input. Upstream failures are recovered internally, never surfaced.
    pub async fn process_turn(
        &mut self,
        session: &mut Session,
        raw_input: &str,
    ) -> Result<String, SupportChatError> {
        // Stage 1 — boundary input shaping.
        let input = self.validate_input(raw_input)?;

        // Stage 2 — crisis gate. Short-circuits before the context window,
        // so crisis turns leave no trace in history and never reach the model.
        if let CrisisVerdict::Crisis { resource_message } = self.gate.evaluate(&input) {
            tracing::info!(session_id = %session.id, "crisis_short_circuit");
            return Ok(resource_message);
        }

        // Stage 3 — render the bounded context window from history as it
        // stood before this turn; the current utterance enters via the cue.
        let context_block = session
            .history
            .render_window(self.config.context_window_turns);

        // Stage 4 — append and persist the user turn.
        self.record_turn(session, Role::User, &input);

        // Stage 5 — compose the model input.
        let prompt = self.builder.build(&context_block, &input);
        let params = GenerationParams::from_config(&self.config);

        // Stage 6 — timeout-bounded model call.
        let started = std::time::Instant::now();
        let timeout = Duration::from_secs(self.config.request_timeout_secs);
        let completion =
            match tokio::time::timeout(timeout, self.oracle.complete(&prompt, &params)).await {
                Ok(Ok(completion)) => completion,
                Ok(Err(e)) => {
                    tracing::warn!(session_id = %session.id, error = %e, "model_call_failed");
                    return Ok(UNAVAILABLE_FALLBACK.to_string());
                }
                Err(_elapsed) => {
                    tracing::warn!(
                        session_id = %session.id,
                        timeout_secs = self.config.request_timeout_secs,
                        "model_call_timed_out"
                    );
                    return Ok(UNAVAILABLE_FALLBACK.to_string());
                }
            };

        // Stage 7 — sanitize the generated text.
        let reply = sanitize::sanitize(&completion.text);

        // Stage 8 — append and persist the assistant turn.
        self.record_turn(session, Role::Assistant, &reply);

        tracing::info!(
            session_id = %session.id,
            turn_count = session.history.len(),
            oracle_ms = started.elapsed().as_millis() as u64,
            prompt_tokens = completion.prompt_tokens,
            completion_tokens = completion.completion_tokens,
            "turn_complete"
        );

        Ok(reply)
    }

    // ── Private stage helpers ──────────────────────────────────────────────

    /// Reject empty or oversized input at the boundary.
    fn validate_input(&self, raw_input: &str) -> Result<String, SupportChatError> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() {
            return Err(SupportChatError::InputValidation(
                "Input cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > MAX_INPUT_LENGTH {
            return Err(SupportChatError::InputValidation(
                "Input too long".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }

    /// Append one turn to history and persist it (graceful degradation:
    /// a store failure keeps the turn in history and logs a warning).
    fn record_turn(&mut self, session: &mut Session, role: Role, text: &str) {
        let turn = Utterance::now(role, text);
        let record = TurnRecord {
            session_id: session.id,
            seq: session.next_seq(),
            role,
            content: turn.text.clone(),
            timestamp: turn.timestamp,
        };
        session.history.append(turn);

        if let Err(e) = self.store.append(record) {
            tracing::warn!(session_id = %session.id, error = %e, "turn_persist_failed");
        }
    }
}
