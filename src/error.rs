//! Error types for a single chat-completion run

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to encode request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    // status is the full line, e.g. "401 Unauthorized"
    #[error("API returned an error: {status}\nResponse body: {body}")]
    Api {
        status: String,
        body: String
    },

    #[error("Failed to decode response: {source}\nResponse body: {body}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error)

}

pub type RunResult<T> = Result<T, RunError>;
