//! Conversation history and context-window rendering.
//!
//! A session owns its history exclusively; the pipeline reads the last N
//! turns when building a prompt and appends exactly one user turn and (on
//! success) one assistant turn per call. Windowing is pure truncation —
//! older turns stay in the full log but silently drop out of model input.

use uuid::Uuid;

use crate::types::Utterance;

/// Ordered, append-only sequence of conversation turns.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    turns: Vec<Utterance>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn to the end. Ordering is creation order; assistant
    /// turns are appended immediately after their triggering user turn.
    pub fn append(&mut self, turn: Utterance) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Full log, oldest first.
    pub fn turns(&self) -> &[Utterance] {
        &self.turns
    }

    /// Render the last `window` turns in chronological order, one line per
    /// turn formatted `<Role>: <text>`, joined with newlines.
    ///
    /// Returns fewer lines when the history is shorter, and an empty string
    /// for an empty history. No summarization, no token budgeting.
    pub fn render_window(&self, window: usize) -> String {
        let start = self.turns.len().saturating_sub(window);
        self.turns[start..]
            .iter()
            .map(|t| format!("{}: {}", t.role.label(), t.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One conversation session: a stable id plus its exclusively-owned history.
///
/// Lifecycle is owned by the calling layer: create a session, process N
/// turns through the pipeline, discard. The pipeline itself holds no
/// per-session state.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub history: ConversationHistory,
    next_seq: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: ConversationHistory::new(),
            next_seq: 0,
        }
    }

    /// Hand out the next persistence sequence number for this session.
    /// `(session id, seq)` keys turn records so retried appends stay idempotent.
    pub fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
