//! Client for OpenAI-compatible chat completion APIs.
//!
//! - `client`: `ApiClient`, the reqwest-backed [`ModelClient`]
//! - `completions`: the `/chat/completions` request helper
//!
//! [`generate`] is what the session calls: transcript in, one assistant turn out.

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse, Message};
use async_trait::async_trait;

mod client;
mod completions;

pub use client::ApiClient;

/// Minimal model API interface used by the session.
///
/// Tests provide scripted responses through this trait instead of the network.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}

/// Sampling settings attached to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f64,
}

impl GenerationParams {
    pub fn from_config(api: &ApiConfig) -> Self {
        Self {
            model: api.model.clone(),
            temperature: api.temperature,
        }
    }
}

/// Send `turns` and return the next assistant turn.
///
/// The returned message always has the assistant role, whatever the provider
/// labelled it. A response without choices or text is an error.
pub async fn generate(
    client: &dyn ModelClient,
    params: &GenerationParams,
    turns: &[Message],
) -> Result<Message, ApiError> {
    let request = ChatRequest {
        model: params.model.clone(),
        messages: turns.to_vec(),
        temperature: Some(params.temperature),
    };
    tracing::debug!(model = %request.model, turns = turns.len(), "requesting completion");

    let response = client.chat(&request).await?;
    if let Some(usage) = &response.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "completion usage"
        );
    }
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::InvalidResponse("model returned no choices".into()))?;
    let content = choice
        .message
        .content
        .ok_or_else(|| ApiError::InvalidResponse("model returned no text content".into()))?;
    Ok(Message::assistant(content))
}
