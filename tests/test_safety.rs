//! Tests for [`support_chat::safety`]
//!
//! Covers crisis detection over the built-in lexicon: case-insensitive
//! substring matching, the fixed byte-identical resource message, and the
//! safe verdict for benign input.

use std::sync::Arc;

use support_chat::lexicon::Lexicon;
use support_chat::safety::{normalize, SafetyGate};
use support_chat::types::CrisisVerdict;

fn gate() -> SafetyGate {
    SafetyGate::new(Arc::new(Lexicon::builtin()))
}

/// Every lexicon keyword trips the gate when embedded in a longer sentence,
/// regardless of letter case.
#[test]
fn test_every_keyword_detected_as_substring() {
    let g = gate();
    for keyword in Lexicon::builtin().crisis_keywords() {
        let upper = keyword.to_uppercase();
        let input = format!("lately i keep thinking {} all the time", upper);
        assert!(
            matches!(g.evaluate(&input), CrisisVerdict::Crisis { .. }),
            "keyword '{}' should trigger the crisis verdict",
            keyword
        );
    }
}

/// The resource message is byte-identical across calls and lexicon instances.
#[test]
fn test_resource_message_is_deterministic() {
    let g = gate();
    let first = match g.evaluate("i want to give up") {
        CrisisVerdict::Crisis { resource_message } => resource_message,
        CrisisVerdict::Safe => panic!("expected crisis"),
    };
    let second = match g.evaluate("there is no point anymore") {
        CrisisVerdict::Crisis { resource_message } => resource_message,
        CrisisVerdict::Safe => panic!("expected crisis"),
    };
    assert_eq!(first, second);
    assert_eq!(first, Lexicon::builtin().crisis_message());
}

/// Strings with no crisis keyword come back safe.
#[test]
fn test_benign_inputs_are_safe() {
    let g = gate();
    for input in [
        "I feel anxious about my exam",
        "today was a good day",
        "can we talk about my job stress",
        "",
        "   ",
    ] {
        assert_eq!(
            g.evaluate(input),
            CrisisVerdict::Safe,
            "input '{}' should be safe",
            input
        );
    }
}

/// Matching has no word boundaries — over-inclusive by design.
#[test]
fn test_substring_matching_is_over_inclusive() {
    // "die" inside "diet" still matches. Accepted false positive.
    assert!(matches!(
        gate().evaluate("i started a new diet"),
        CrisisVerdict::Crisis { .. }
    ));
}

/// Normalization is lowercase + trim and nothing else.
#[test]
fn test_normalize_lowercases_and_trims() {
    assert_eq!(normalize("  Hello THERE  "), "hello there");
    assert_eq!(normalize("don't change punctuation!"), "don't change punctuation!");
}
