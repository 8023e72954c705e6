//! Tests for [`support_chat::config`]
//!
//! Env-var tests use a process-wide `Mutex` to run serially even under the
//! default multi-threaded test harness (`cargo test`).

use std::sync::{Mutex, MutexGuard};

use support_chat::config::{
    load_config_from_env, CONTEXT_WINDOW_TURNS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P,
    MAX_OUTPUT_TOKENS, REQUEST_TIMEOUT_SECS,
};
use support_chat::error::SupportChatError;

// ── Serialiser ────────────────────────────────────────────────────────────────

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner())
}

// ── Helper: guard that restores env vars on drop ──────────────────────────────

struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self { key, original }
    }

    fn remove(key: &'static str) -> Self {
        let original = std::env::var(key).ok();
        std::env::remove_var(key);
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Missing LLM_API_KEY is a fatal configuration error.
#[test]
fn test_missing_api_key_fails() {
    let _lock = lock_env();
    let _g = EnvGuard::remove("LLM_API_KEY");

    let result = load_config_from_env();
    match result {
        Err(SupportChatError::Config(msg)) => {
            assert!(msg.contains("LLM_API_KEY"));
        }
        other => panic!("expected Config error, got: {:?}", other.map(|_| ())),
    }
}

/// An empty key is rejected the same way.
#[test]
fn test_empty_api_key_fails() {
    let _lock = lock_env();
    let _g = EnvGuard::set("LLM_API_KEY", "");

    assert!(load_config_from_env().is_err());
}

/// A base URL without an http(s) scheme is rejected.
#[test]
fn test_invalid_base_url_fails() {
    let _lock = lock_env();
    let _g = EnvGuard::set("LLM_API_KEY", "test-key");
    let _g2 = EnvGuard::set("LLM_BASE_URL", "ftp://example.com");

    assert!(load_config_from_env().is_err());
}

/// Unset optional variables take the documented defaults.
#[test]
fn test_defaults_applied() {
    let _lock = lock_env();
    let _g = EnvGuard::set("LLM_API_KEY", "test-key");
    let _g2 = EnvGuard::remove("LLM_BASE_URL");
    let _g3 = EnvGuard::remove("LLM_TEMPERATURE");
    let _g4 = EnvGuard::remove("LLM_TOP_P");
    let _g5 = EnvGuard::remove("CONTEXT_WINDOW_TURNS");
    let _g6 = EnvGuard::remove("MAX_OUTPUT_TOKENS");
    let _g7 = EnvGuard::remove("LLM_REQUEST_TIMEOUT_SECS");
    let _g8 = EnvGuard::remove("LLM_MODEL");

    let config = load_config_from_env().expect("config should load");
    assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
    assert_eq!(config.top_p, DEFAULT_TOP_P);
    assert_eq!(config.context_window_turns, CONTEXT_WINDOW_TURNS);
    assert_eq!(config.max_output_tokens, MAX_OUTPUT_TOKENS);
    assert_eq!(config.request_timeout_secs, REQUEST_TIMEOUT_SECS);
    assert_eq!(config.model, "Meta-Llama-3.1-8B-Instruct");
    assert!(config.base_url.starts_with("https://"));
}

/// Sampling parameters are clamped into [0, 1].
#[test]
fn test_sampling_params_clamped() {
    let _lock = lock_env();
    let _g = EnvGuard::set("LLM_API_KEY", "test-key");
    let _g2 = EnvGuard::set("LLM_TEMPERATURE", "3.5");
    let _g3 = EnvGuard::set("LLM_TOP_P", "-1.0");

    let config = load_config_from_env().expect("config should load");
    assert_eq!(config.temperature, 1.0);
    assert_eq!(config.top_p, 0.0);
}

/// Unparseable numeric overrides fall back to defaults rather than failing.
#[test]
fn test_unparseable_overrides_fall_back() {
    let _lock = lock_env();
    let _g = EnvGuard::set("LLM_API_KEY", "test-key");
    let _g2 = EnvGuard::set("CONTEXT_WINDOW_TURNS", "lots");

    let config = load_config_from_env().expect("config should load");
    assert_eq!(config.context_window_turns, CONTEXT_WINDOW_TURNS);
}
