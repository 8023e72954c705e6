//! Static lexicon: crisis keywords, crisis resources, therapeutic phrase
//! templates, and coping-technique text.
//!
//! Loaded once at startup and shared read-only by every session — no entry
//! is ever added, changed, or removed while the process runs.

use std::collections::HashMap;

/// Crisis indicator keywords, matched as case-insensitive substrings.
///
/// Deliberately over-inclusive: "harm" also matches inside unrelated words.
/// The gate biases toward caution and accepts the false positives.
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill",
    "die",
    "harm",
    "hurt myself",
    "end it all",
    "give up",
    "no point",
];

/// Crisis resource lines, concatenated into the fixed gate response.
const RESOURCE_EMERGENCY: &str =
    "If you're having thoughts of self-harm, please call emergency services (911) or contact the following:";
const RESOURCE_SUICIDE_PREVENTION: &str = "National Suicide Prevention Lifeline: 988";
const RESOURCE_CRISIS_TEXT: &str = "Crisis Text Line: Text HOME to 741741";
const RESOURCE_CLOSING: &str =
    "\nWhile I'm here to listen, it's important to reach out to professional help in crisis situations.";

/// A named coping technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    Breathing,
    Grounding,
    Reframing,
}

const TECHNIQUE_BREATHING: &str =
    "Let's try a simple breathing exercise: Breathe in for 4 counts, hold for 4, exhale for 4.";
const TECHNIQUE_GROUNDING: &str =
    "Can you name 5 things you can see, 4 things you can touch, 3 things you can hear?";
const TECHNIQUE_REFRAMING: &str =
    "Let's try to look at this situation from a different perspective.";

/// Immutable lexicon shared by all pipeline components.
#[derive(Debug, Clone)]
pub struct Lexicon {
    crisis_keywords: Vec<&'static str>,
    /// Prebuilt so repeated crisis verdicts are byte-identical.
    crisis_message: String,
    templates: HashMap<&'static str, &'static str>,
}

impl Lexicon {
    /// Build the built-in lexicon.
    pub fn builtin() -> Self {
        let crisis_message = [
            RESOURCE_EMERGENCY,
            RESOURCE_SUICIDE_PREVENTION,
            RESOURCE_CRISIS_TEXT,
            RESOURCE_CLOSING,
        ]
        .join("\n");

        let mut templates = HashMap::new();
        templates.insert(
            "greeting",
            "Hi, I'm here to listen and support you. How are you feeling today?",
        );
        templates.insert(
            "validation",
            "I hear that you're feeling {emotion}. That must be really difficult.",
        );
        templates.insert(
            "exploration",
            "Could you tell me more about what's making you feel this way?",
        );
        templates.insert(
            "coping",
            "Would you like to explore some coping strategies together?",
        );

        Self {
            crisis_keywords: CRISIS_KEYWORDS.to_vec(),
            crisis_message,
            templates,
        }
    }

    /// Crisis indicator keywords (already lowercase).
    pub fn crisis_keywords(&self) -> &[&'static str] {
        &self.crisis_keywords
    }

    /// The fixed crisis resource message. Byte-identical across calls.
    pub fn crisis_message(&self) -> &str {
        &self.crisis_message
    }

    /// Session-opening greeting line.
    pub fn greeting(&self) -> &str {
        self.templates["greeting"]
    }

    /// Look up a named therapeutic template.
    pub fn template(&self, name: &str) -> Option<&'static str> {
        self.templates.get(name).copied()
    }

    /// Render the validation template with `{emotion}` substituted.
    pub fn render_validation(&self, emotion: &str) -> String {
        self.templates["validation"].replace("{emotion}", emotion)
    }

    /// Text of a coping technique.
    pub fn technique(&self, technique: Technique) -> &'static str {
        match technique {
            Technique::Breathing => TECHNIQUE_BREATHING,
            Technique::Grounding => TECHNIQUE_GROUNDING,
            Technique::Reframing => TECHNIQUE_REFRAMING,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
