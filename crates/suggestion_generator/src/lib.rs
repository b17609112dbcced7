// crates/suggestion_generator/src/lib.rs

//! Turns a prompt into a suggestion through an external text-completion service.
//!
//! The rest of the workspace only depends on [`CompletionClient`]; the OpenAI
//! backed implementation lives in [`openai`] and its settings in [`config`].

pub mod config;
pub mod openai;

pub use config::{ApiConfig, ConfigError};
pub use openai::OpenAiClient;

use thiserror::Error;

/// Text used when the service answers without any content.
pub const NO_SUGGESTION: &str = "No suggestion generated.";

/// Failure of a single completion call. Never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication rejected (HTTP {status}): {body}")]
    Unauthorized { status: u16, body: String },

    #[error("rate limited (HTTP 429): {body}")]
    RateLimited { body: String },

    #[error("completion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// The one capability the scanner needs from a language model.
pub trait CompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

/// Submits the prompt and hands back whatever the client produced.
pub fn generate_suggestion(client: &dyn CompletionClient, prompt: &str) -> Result<String, ApiError> {
    client.complete(prompt)
}
