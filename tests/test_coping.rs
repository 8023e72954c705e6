//! Tests for [`support_chat::coping`]

use std::sync::Arc;

use support_chat::coping::CopingAdvisor;
use support_chat::lexicon::{Lexicon, Technique};

fn advisor() -> CopingAdvisor {
    CopingAdvisor::new(Arc::new(Lexicon::builtin()))
}

/// "anxiety" maps to the breathing technique.
#[test]
fn test_anxiety_maps_to_breathing() {
    let lex = Lexicon::builtin();
    assert_eq!(advisor().suggest("anxiety"), lex.technique(Technique::Breathing));
}

/// "overwhelmed" and "negative thoughts" map to grounding and reframing.
#[test]
fn test_known_labels_map_exactly() {
    let lex = Lexicon::builtin();
    let a = advisor();
    assert_eq!(a.suggest("overwhelmed"), lex.technique(Technique::Grounding));
    assert_eq!(
        a.suggest("negative thoughts"),
        lex.technique(Technique::Reframing)
    );
}

/// Unknown labels fall back to the breathing technique — same text as
/// the "anxiety" mapping.
#[test]
fn test_unknown_label_falls_back_to_breathing() {
    let a = advisor();
    assert_eq!(a.suggest("unknown-emotion"), a.suggest("anxiety"));
    assert_eq!(a.suggest(""), a.suggest("anxiety"));
}

/// Lookup is exact-match only: close variants take the fallback.
#[test]
fn test_no_fuzzy_matching() {
    let lex = Lexicon::builtin();
    let a = advisor();
    // "Anxiety" (capitalized) is not the exact label "anxiety".
    assert_eq!(a.suggest("Anxiety"), lex.technique(Technique::Breathing));
    assert_eq!(a.suggest("overwhelm"), lex.technique(Technique::Breathing));
}
