//! Prompt composition: system instruction + windowed history + current turn.

use crate::types::ComposedPrompt;

/// Therapeutic framing sent as the system-role instruction on every request.
///
/// The framing is itself a safety control: it pins the model to validation
/// and active listening and explicitly forbids diagnosis or medical advice.
pub const SYSTEM_INSTRUCTION: &str = "You are a supportive and empathetic listener trained to help people with mental health challenges. \
Focus on validation, active listening, and suggesting healthy coping strategies. \
Never provide medical advice or diagnosis. Always encourage professional help when needed.";

/// Deterministic prompt composer.
///
/// Holds the system instruction so alternative framings can be injected in
/// tests; production use goes through [`PromptBuilder::default`].
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    system_instruction: String,
}

impl PromptBuilder {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
        }
    }

    /// Compose the model input in fixed order: system instruction, a labeled
    /// `Conversation history:` section with the rendered context block, then
    /// the `User: <utterance>\nAssistant:` cue marking the generation
    /// boundary.
    ///
    /// No validation of `user_utterance` happens here — crisis cases were
    /// already gated before this stage is reached.
    pub fn build(&self, context_block: &str, user_utterance: &str) -> ComposedPrompt {
        let user_content = format!(
            "Conversation history:\n{}\n\nUser: {}\nAssistant:",
            context_block, user_utterance
        );

        ComposedPrompt {
            system: self.system_instruction.clone(),
            user_content,
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(SYSTEM_INSTRUCTION)
    }
}
