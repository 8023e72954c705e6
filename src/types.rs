//! Shared types and data structures for the support-chat pipeline.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Display label used when rendering history into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single immutable conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utterance {
    pub role: Role,
    pub text: String,
    pub timestamp: SystemTime,
}

impl Utterance {
    /// Create an utterance stamped with the current time.
    pub fn now(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: SystemTime::now(),
        }
    }
}

/// Outcome of the crisis safety gate.
///
/// Crisis detection is an intentional short-circuit with a deterministic
/// response, never an error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrisisVerdict {
    /// No crisis keyword matched — the turn proceeds to the model.
    Safe,
    /// A crisis keyword matched — the pipeline replies with the fixed
    /// resource message and never reaches the model.
    Crisis { resource_message: String },
}

/// Generation parameters sent with every model request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// Derive request parameters from the loaded configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

/// Fully composed model input, ready to send.
///
/// The wire convention is two messages with explicit roles: a system-role
/// message carrying the therapeutic instruction, and a user-role message
/// carrying the windowed history plus the `User:`/`Assistant:` cue. Keeping
/// the system instruction in its own role preserves its authority over model
/// behaviour instead of burying it inside user content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposedPrompt {
    /// System-role instruction (therapeutic framing).
    pub system: String,
    /// User-role content: labeled history block + current utterance + cue.
    pub user_content: String,
}

impl ComposedPrompt {
    /// The prompt as one aggregated string, system instruction first.
    ///
    /// Used for logging and for backends that accept a single completion
    /// string rather than role-separated messages.
    pub fn rendered(&self) -> String {
        format!("{}\n\n{}", self.system, self.user_content)
    }
}

/// Raw response received from the model backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// One append-only persistence record per conversation turn.
///
/// `(session_id, seq)` is the idempotency key: a retrying caller may deliver
/// the same record more than once and the store keeps a single copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub session_id: Uuid,
    pub seq: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: SystemTime,
}
