use reqwest::{Client, StatusCode};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use crate::config::RunConfig;
use crate::error::{RunError, RunResult};
use crate::models::{ChatRequest, ChatResponse};

/// Decoded response together with the exact body text it came from.
#[derive(Debug, Clone)]
pub struct Completion {
    pub response: ChatResponse,
    pub body: String
}

pub async fn send_chat(
    client: &Client,
    config: &RunConfig,
    request: &ChatRequest
) -> RunResult<Completion> {

    let payload = serde_json::to_vec(request).map_err(RunError::Serialize)?;

    let mut builder = client
        .post(&config.endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {}", config.api_key))
        .body(payload);

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    let response = builder.send().await?;
    let status = response.status();

    // consumes the response, so the connection is released on every path below
    let body = response.text().await?;

    tracing::debug!(%status, bytes = body.len(), "chat completion response received");

    if status != StatusCode::OK {
        return Err(RunError::Api {
            status: status.to_string(),
            body
        });
    }

    match serde_json::from_str::<ChatResponse>(&body) {
        Ok(response) => Ok(Completion { response, body }),
        Err(source) => Err(RunError::Decode { source, body })
    }

}
