// crates/suggestion_generator/src/openai.rs

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::{ApiError, CompletionClient, NO_SUGGESTION};

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat-completions client for OpenAI compatible endpoints.
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", config.api_base.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        log::debug!("POST {} ({} prompt bytes)", self.endpoint, prompt.len());
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        if !status.is_success() {
            return Err(classify_status(status, text));
        }
        parse_completion(&text)
    }
}

/// Maps a non-success HTTP status to the matching [`ApiError`].
pub fn classify_status(status: StatusCode, body: String) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized {
            status: status.as_u16(),
            body,
        },
        StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited { body },
        _ => ApiError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

/// Pulls the first choice's message out of a chat-completions body.
///
/// A reply with an empty first choice yields [`NO_SUGGESTION`]; a body
/// without a usable `choices` array is malformed.
pub fn parse_completion(body: &str) -> Result<String, ApiError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::MalformedResponse("response has no choices".to_string()))?;

    match choice.message.and_then(|m| m.content) {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Ok(NO_SUGGESTION.to_string()),
    }
}
