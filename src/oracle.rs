//! The model-oracle capability boundary.
//!
//! The core treats text generation as an opaque, potentially slow,
//! potentially failing collaborator. Production uses the HTTP client in
//! [`crate::llm_api`]; tests substitute scripted stubs.

use async_trait::async_trait;

use crate::error::SupportChatError;
use crate::types::{CompletionResponse, ComposedPrompt, GenerationParams};

/// Text-completion capability the pipeline depends on.
///
/// # Errors
/// Implementations return [`SupportChatError::Upstream`] on transport, auth,
/// quota, or malformed-response failures. The pipeline bounds each call with
/// a caller-supplied timeout; on failure or timeout the assistant turn is
/// never appended to history.
#[async_trait]
pub trait ModelOracle: Send + Sync {
    async fn complete(
        &self,
        prompt: &ComposedPrompt,
        params: &GenerationParams,
    ) -> Result<CompletionResponse, SupportChatError>;
}
