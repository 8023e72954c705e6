//! Response post-processing: soften directive language, gate the
//! professional-help disclaimer.
//!
//! Two deterministic passes, in order. Both are surface-level text
//! rewrites, not semantic ones, and the whole function is idempotent:
//! the replacement phrase matches no directive pattern, and an
//! already-appended disclaimer suppresses a second append.

use std::sync::LazyLock;

use regex::Regex;

/// Directive phrases rewritten into suggestive language. Exact literal
/// phrases only, matched case-insensitively.
static DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)you should|you must|you need to").expect("valid regex")
});

/// Words that mark clinical territory and trigger the disclaimer.
const DISCLAIMER_TRIGGERS: &[&str] = &["anxiety", "depression", "diagnosis"];

/// Fixed disclaimer paragraph, appended at most once.
pub const DISCLAIMER: &str = "Please note: This is supportive listening only. For professional help, please consult a licensed mental health professional.";

/// Sanitize one raw model response.
///
/// Pass 1 replaces `you should` / `you must` / `you need to` with
/// `you might consider`, keeping the capitalization of the matched text.
/// Pass 2 appends [`DISCLAIMER`] when any trigger word is present
/// (case-insensitive) — exactly once, no matter how many triggers match.
pub fn sanitize(raw: &str) -> String {
    let rewritten = DIRECTIVE_RE
        .replace_all(raw, |caps: &regex::Captures| {
            if caps[0].starts_with('Y') {
                "You might consider"
            } else {
                "you might consider"
            }
        })
        .into_owned();

    let lower = rewritten.to_lowercase();
    let triggered = DISCLAIMER_TRIGGERS.iter().any(|w| lower.contains(w));

    if triggered && !rewritten.contains(DISCLAIMER) {
        format!("{rewritten}\n\n{DISCLAIMER}")
    } else {
        rewritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_each_directive_phrase() {
        assert_eq!(
            sanitize("you should rest. you must eat. you need to sleep."),
            "you might consider rest. you might consider eat. you might consider sleep."
        );
    }

    #[test]
    fn rewrite_preserves_capitalization() {
        assert_eq!(sanitize("You should rest."), "You might consider rest.");
    }

    #[test]
    fn leaves_other_text_untouched() {
        let text = "It sounds like a hard week. What helped you last time?";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn disclaimer_appended_once_for_multiple_triggers() {
        let out = sanitize("Anxiety and depression are common.");
        assert_eq!(out.matches(DISCLAIMER).count(), 1);
    }

    #[test]
    fn idempotent_on_triggered_text() {
        let once = sanitize("This sounds like anxiety.");
        assert_eq!(sanitize(&once), once);
    }
}
