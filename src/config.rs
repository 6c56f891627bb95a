use std::time::Duration;
use crate::error::{RunError, RunResult};

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const DEFAULT_USER_PROMPT: &str = "Напиши короткий рассказ о роботе, который научился мечтать.";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Everything one run needs: where to send, who we are, and what to ask.
#[derive(Clone)]
pub struct RunConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: Option<u32>,
    // None waits on the provider indefinitely
    pub timeout: Option<Duration>
}

impl RunConfig {

    /// Fixed run parameters with the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {

        RunConfig {
            api_key: api_key.into(),
            endpoint: OPENAI_CHAT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            user_prompt: DEFAULT_USER_PROMPT.to_string(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            timeout: Some(DEFAULT_TIMEOUT)
        }

    }

    /// Reads the credential from `OPENAI_API_KEY`.
    pub fn from_env() -> RunResult<Self> {

        let api_key = require_api_key(std::env::var(API_KEY_VAR).ok())?;
        Ok(Self::new(api_key))

    }

    /// Checked by every run before anything is sent.
    pub fn validate(&self) -> RunResult<()> {

        if self.api_key.is_empty() {
            return Err(RunError::Config(format!("{} is empty", API_KEY_VAR)));
        }

        Ok(())

    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {

        self.endpoint = endpoint.into();
        self

    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {

        self.model = model.into();
        self

    }

    pub fn with_prompts(mut self, system: impl Into<String>, user: impl Into<String>) -> Self {

        self.system_prompt = system.into();
        self.user_prompt = user.into();
        self

    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {

        self.max_tokens = max_tokens;
        self

    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {

        self.timeout = timeout;
        self

    }

}

// keep the key out of logs
impl std::fmt::Debug for RunConfig {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {

        f.debug_struct("RunConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("system_prompt", &self.system_prompt)
            .field("user_prompt", &self.user_prompt)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()

    }

}

/// Rejects a missing or empty credential.
pub fn require_api_key(value: Option<String>) -> RunResult<String> {

    match value {
        Some(key) if !key.is_empty() => Ok(key),
        Some(_) => Err(RunError::Config(format!("{} is set but empty", API_KEY_VAR))),
        None => Err(RunError::Config(format!("{} is not set", API_KEY_VAR)))
    }

}
