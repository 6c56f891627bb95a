//! Sends one chat-completion request to the OpenAI API and reports the
//! assistant's reply with token usage.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod runner;
pub mod telemetry;

pub use config::RunConfig;
pub use error::{RunError, RunResult};
pub use runner::{Outcome, RequestRunner};
