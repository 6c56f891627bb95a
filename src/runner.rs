//! One request/response cycle against a chat-completion endpoint.

use chrono::DateTime;
use reqwest::Client;
use crate::client::send_chat;
use crate::config::RunConfig;
use crate::error::RunResult;
use crate::models::{ChatMessage, ChatRequest, Usage};

/// What the provider gave back for a successful (HTTP 200) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answer {
        model: String,
        content: String,
        usage: Usage
    },
    /// The call succeeded but `choices` was empty.
    NoAnswer {
        raw_body: String
    }
}

pub struct RequestRunner {
    http_client: Client,
    config: RunConfig
}

impl RequestRunner {

    pub fn new(http_client: Client, config: RunConfig) -> Self {

        RequestRunner { http_client, config }

    }

    /// System prompt first, then the user prompt.
    pub fn build_request(&self) -> ChatRequest {

        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(self.config.system_prompt.as_str()),
                ChatMessage::user(self.config.user_prompt.as_str())
            ],
            max_tokens: self.config.max_tokens
        }

    }

    pub async fn run(&self) -> RunResult<Outcome> {

        self.config.validate()?;

        let request = self.build_request();

        tracing::info!(
            endpoint = %self.config.endpoint,
            model = %request.model,
            max_tokens = ?request.max_tokens,
            "sending chat completion request"
        );

        let completion = send_chat(&self.http_client, &self.config, &request).await?;
        let response = completion.response;

        let Some(choice) = response.first_choice() else {
            tracing::warn!(id = %response.id, "response contained no choices");
            return Ok(Outcome::NoAnswer { raw_body: completion.body });
        };

        let created = DateTime::from_timestamp(response.created, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string());

        tracing::info!(
            id = %response.id,
            model = %response.model,
            created = %created,
            finish_reason = choice.finish_reason.as_deref().unwrap_or("none"),
            total_tokens = response.usage.total_tokens,
            "chat completion received"
        );

        Ok(Outcome::Answer {
            model: response.model.clone(),
            content: choice.message.content.clone(),
            usage: response.usage
        })

    }

}
