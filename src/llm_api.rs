//! OpenAI-compatible chat-completions HTTP client using reqwest.
//!
//! The backend generates text only — all gating and sanitization stays in
//! Rust. Maps 401, 429, and 5xx responses to structured upstream errors so
//! raw backend payloads never reach the end user.

use async_trait::async_trait;
use serde_json::json;

use crate::config::Config;
use crate::error::SupportChatError;
use crate::oracle::ModelOracle;
use crate::types::{CompletionResponse, ComposedPrompt, GenerationParams};

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiCompatClient {
    /// Create a client bound to the configured backend.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        }
    }

    // ── Private helpers ────────────────────────────────────────────────────

    /// Build the JSON request body.
    ///
    /// Two messages with explicit roles: the system instruction keeps its
    /// own role rather than being folded into user content.
    fn build_body(prompt: &ComposedPrompt, params: &GenerationParams) -> serde_json::Value {
        json!({
            "model":       params.model,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user",   "content": prompt.user_content },
            ],
            "temperature": params.temperature,
            "top_p":       params.top_p,
            "max_tokens":  params.max_output_tokens,
        })
    }

    /// Execute the POST request and surface structured HTTP errors.
    async fn post(&self, body: serde_json::Value) -> Result<serde_json::Value, SupportChatError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(SupportChatError::Http)?;

        let status = response.status();

        if status.is_success() {
            return response
                .json::<serde_json::Value>()
                .await
                .map_err(SupportChatError::Http);
        }

        // Read body for diagnostics before consuming the response.
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "(unreadable body)".to_string());

        Err(map_http_error(status.as_u16(), &error_body))
    }

    /// Parse the raw chat-completions JSON into a [`CompletionResponse`].
    fn parse_response(json: serde_json::Value) -> Result<CompletionResponse, SupportChatError> {
        let model = json
            .get("model")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string();

        let prompt_tokens = json
            .pointer("/usage/prompt_tokens")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let completion_tokens = json
            .pointer("/usage/completion_tokens")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                SupportChatError::Upstream(
                    "response missing choices[0].message.content".to_string(),
                )
            })?
            .to_string();

        Ok(CompletionResponse {
            text,
            model,
            prompt_tokens,
            completion_tokens,
        })
    }
}

#[async_trait]
impl ModelOracle for OpenAiCompatClient {
    async fn complete(
        &self,
        prompt: &ComposedPrompt,
        params: &GenerationParams,
    ) -> Result<CompletionResponse, SupportChatError> {
        let body = Self::build_body(prompt, params);
        let raw = self.post(body).await?;
        Self::parse_response(raw)
    }
}

// ── HTTP error mapping ────────────────────────────────────────────────────────

/// Maximum number of characters from an HTTP error body included in error
/// messages. Prevents large or potentially sensitive server responses from
/// propagating verbatim through error chains and log sinks.
const MAX_ERROR_BODY_LEN: usize = 200;

fn map_http_error(status: u16, body: &str) -> SupportChatError {
    // Truncate raw body to avoid leaking large or sensitive API error payloads.
    // Char-based truncation avoids panicking at a multi-byte UTF-8 boundary.
    let safe_body = if body.chars().count() > MAX_ERROR_BODY_LEN {
        let truncated: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
        format!("{truncated}…[truncated]")
    } else {
        body.to_string()
    };

    match status {
        401 => SupportChatError::Upstream("Unauthorized: check LLM_API_KEY".to_string()),
        429 => SupportChatError::Upstream("Rate limited by model backend".to_string()),
        s if s >= 500 => {
            SupportChatError::Upstream(format!("Backend server error {s}: {safe_body}"))
        }
        s => SupportChatError::Upstream(format!("HTTP {s}: {safe_body}")),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_chat_completion() {
        let json = serde_json::json!({
            "model": "Meta-Llama-3.1-8B-Instruct",
            "choices": [{"message": {"role": "assistant", "content": "I'm listening."}}],
            "usage": {"prompt_tokens": 42, "completion_tokens": 7}
        });
        let resp = OpenAiCompatClient::parse_response(json).unwrap();
        assert_eq!(resp.text, "I'm listening.");
        assert_eq!(resp.prompt_tokens, 42);
        assert_eq!(resp.completion_tokens, 7);
        assert_eq!(resp.model, "Meta-Llama-3.1-8B-Instruct");
    }

    #[test]
    fn parse_missing_content_is_upstream_error() {
        let json = serde_json::json!({"model": "m", "choices": []});
        let err = OpenAiCompatClient::parse_response(json).unwrap_err();
        assert!(err.to_string().contains("missing choices"));
    }

    #[test]
    fn body_carries_roles_and_sampling_params() {
        let prompt = ComposedPrompt {
            system: "be kind".to_string(),
            user_content: "User: hi\nAssistant:".to_string(),
        };
        let params = GenerationParams {
            model: "m".to_string(),
            temperature: 0.7,
            top_p: 0.9,
            max_output_tokens: 512,
        };
        let body = OpenAiCompatClient::build_body(&prompt, &params);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["max_tokens"], 512);
    }

    #[test]
    fn map_401() {
        let err = map_http_error(401, "");
        assert!(err.to_string().contains("Unauthorized"));
    }

    #[test]
    fn map_429() {
        let err = map_http_error(429, "");
        assert!(err.to_string().contains("Rate limited"));
    }

    #[test]
    fn map_503_truncates_long_body() {
        let long_body = "x".repeat(1000);
        let err = map_http_error(503, &long_body);
        let msg = err.to_string();
        assert!(msg.contains("server error"));
        assert!(msg.contains("[truncated]"));
    }
}
