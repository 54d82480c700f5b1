//! `/chat/completions` request helper.

use crate::error::ApiError;
use crate::types::{ChatRequest, ChatResponse};
use serde_json::Value;

/// POST `request` to `<base_url>/chat/completions` and decode the reply.
pub(crate) async fn request(
    http: &reqwest::Client,
    base_url: &str,
    request: &ChatRequest,
    bearer: &str,
) -> Result<ChatResponse, ApiError> {
    let url = format!("{base_url}/chat/completions");
    tracing::debug!(%url, model = %request.model, turns = request.messages.len(), "chat completion");
    let response = http
        .post(&url)
        .bearer_auth(bearer)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "chat completion rejected");
        return Err(ApiError::Status(status.as_u16(), error_detail(&body)));
    }

    let body = response.text().await?;
    serde_json::from_str::<ChatResponse>(&body)
        .map_err(|err| ApiError::InvalidResponse(format!("malformed completion payload: {err}")))
}

/// Pull `error.message` out of an OpenAI-style error body, else return it trimmed.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
