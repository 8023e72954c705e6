//! Coping-strategy lookup: emotional state → suggested technique text.

use std::sync::Arc;

use crate::lexicon::{Lexicon, Technique};

/// Exact-match mapping from an emotion label to a coping technique.
/// No fuzzy matching; unknown labels fall back to the breathing exercise.
pub struct CopingAdvisor {
    lexicon: Arc<Lexicon>,
}

impl CopingAdvisor {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Suggest a technique for `emotion`.
    pub fn suggest(&self, emotion: &str) -> &'static str {
        let technique = match emotion {
            "anxiety" => Technique::Breathing,
            "overwhelmed" => Technique::Grounding,
            "negative thoughts" => Technique::Reframing,
            _ => Technique::Breathing,
        };
        self.lexicon.technique(technique)
    }
}
