//! Configuration loading from environment variables via dotenvy.
//! No values are ever hardcoded here.

use crate::error::SupportChatError;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat-completions backend — sourced from `LLM_API_KEY`
    pub api_key: String,
    /// Base URL of the OpenAI-compatible backend — sourced from `LLM_BASE_URL`
    pub base_url: String,
    /// Model identifier — sourced from `LLM_MODEL`
    pub model: String,
    /// Sampling temperature in `[0, 1]` — sourced from `LLM_TEMPERATURE`
    pub temperature: f32,
    /// Nucleus-sampling cutoff in `[0, 1]` — sourced from `LLM_TOP_P`
    pub top_p: f32,
    /// Number of most-recent conversation turns rendered into the prompt —
    /// sourced from `CONTEXT_WINDOW_TURNS`
    pub context_window_turns: usize,
    /// Upper bound on generated tokens per reply — sourced from `MAX_OUTPUT_TOKENS`
    pub max_output_tokens: u32,
    /// Wall-clock bound on a single model call, in seconds —
    /// sourced from `LLM_REQUEST_TIMEOUT_SECS`
    pub request_timeout_secs: u64,
}

/// Load configuration purely from already-set environment variables.
///
/// Does **not** call `dotenvy::dotenv()` — useful in tests that need to
/// control the env precisely via [`std::env::set_var`] / [`std::env::remove_var`].
///
/// # Errors
/// Returns [`SupportChatError::Config`] if required variables are missing or invalid.
pub fn load_config_from_env() -> Result<Config, SupportChatError> {
    let api_key = std::env::var("LLM_API_KEY")
        .map_err(|_| SupportChatError::Config("LLM_API_KEY not set".to_string()))?;

    if api_key.is_empty() {
        return Err(SupportChatError::Config(
            "LLM_API_KEY is empty".to_string(),
        ));
    }

    let base_url = std::env::var("LLM_BASE_URL")
        .unwrap_or_else(|_| "https://api.sambanova.ai/v1".to_string());

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(SupportChatError::Config(
            "LLM_BASE_URL must start with http:// or https://".to_string(),
        ));
    }

    // SECURITY: warn when a plaintext HTTP endpoint is configured.
    // The API key travels in the `Authorization` header, which would be
    // exposed in cleartext on http:// connections. Only acceptable on
    // localhost for local-proxy development setups.
    if base_url.starts_with("http://") {
        eprintln!(
            "WARNING: LLM_BASE_URL uses plaintext http://. \
             The API key will be transmitted without TLS encryption."
        );
    }

    let model = std::env::var("LLM_MODEL")
        .unwrap_or_else(|_| "Meta-Llama-3.1-8B-Instruct".to_string());

    let temperature = std::env::var("LLM_TEMPERATURE")
        .ok()
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(DEFAULT_TEMPERATURE)
        .clamp(0.0, 1.0);

    let top_p = std::env::var("LLM_TOP_P")
        .ok()
        .and_then(|v| v.parse::<f32>().ok())
        .unwrap_or(DEFAULT_TOP_P)
        .clamp(0.0, 1.0);

    let context_window_turns = std::env::var("CONTEXT_WINDOW_TURNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(CONTEXT_WINDOW_TURNS);

    let max_output_tokens = std::env::var("MAX_OUTPUT_TOKENS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(MAX_OUTPUT_TOKENS);

    let request_timeout_secs = std::env::var("LLM_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(REQUEST_TIMEOUT_SECS);

    Ok(Config {
        api_key,
        base_url,
        model,
        temperature,
        top_p,
        context_window_turns,
        max_output_tokens,
        request_timeout_secs,
    })
}

/// Load configuration from the environment (`.env` + system env vars).
///
/// Loads `.env` via `dotenvy` first (ignoring errors if the file is absent),
/// then delegates to [`load_config_from_env`].
///
/// # Errors
/// Returns [`SupportChatError::Config`] if required variables are missing or invalid.
pub fn load_config() -> Result<Config, SupportChatError> {
    // Load .env if present; ignore the error — variables may already be set externally.
    let _ = dotenvy::dotenv();
    load_config_from_env()
}

// ── Pipeline defaults ──────────────────────────────────────────────────────

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default nucleus-sampling cutoff.
pub const DEFAULT_TOP_P: f32 = 0.9;

/// Number of most-recent conversation turns included in the model context.
/// Older turns stay in the full history but silently drop out of the prompt.
pub const CONTEXT_WINDOW_TURNS: usize = 5;

/// Maximum tokens generated per reply.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

/// Default wall-clock bound on a single model call, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed length (bytes) for a single user message.
pub const MAX_INPUT_LENGTH: usize = 8_192;
