//! Crisis safety gate.
//!
//! Classifies a user utterance as crisis / non-crisis before anything else
//! runs. On a match the pipeline short-circuits with the lexicon's fixed
//! resource message and the model is never called.

use std::sync::Arc;

use crate::lexicon::Lexicon;
use crate::types::CrisisVerdict;

/// Normalize user input for matching: lowercase, trim whitespace.
/// No other transformation.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

/// Keyword-based crisis classifier over the shared lexicon.
///
/// Total function over any string input — it cannot fail; an empty or
/// malformed string is simply `Safe`.
pub struct SafetyGate {
    lexicon: Arc<Lexicon>,
}

impl SafetyGate {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Evaluate one utterance.
    ///
    /// Matching is a plain case-insensitive substring test with no
    /// word-boundary requirement — over-inclusive by intent, biasing toward
    /// caution. The first matching keyword short-circuits; there is no
    /// scoring or weighting.
    pub fn evaluate(&self, input: &str) -> CrisisVerdict {
        let normalized = normalize(input);

        for keyword in self.lexicon.crisis_keywords() {
            if normalized.contains(keyword) {
                return CrisisVerdict::Crisis {
                    resource_message: self.lexicon.crisis_message().to_string(),
                };
            }
        }

        CrisisVerdict::Safe
    }
}
