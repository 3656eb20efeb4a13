//! Chat-completion client for a second opinion on a positive local verdict.
//!
//! Speaks the OpenAI-compatible `/chat/completions` wire format: one
//! user-role message carrying the extracted page content and a yes/no
//! prompt; the first choice's message content is the justification.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("response contained no choices")]
    EmptyResponse,
}

/// Client for an OpenAI-compatible chat-completion endpoint.
pub struct LlmClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl LlmClient {
    /// Create a client for the given endpoint base URL (no trailing slash),
    /// bearer credential, and model identifier.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    /// Ask the remote model for a yes/no clickbait judgement with a short
    /// reason for the given page content.
    pub async fn corroborate(&self, content: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: analysis_prompt(content),
            }],
        };

        info!(url = %url, model = %self.model, "requesting remote clickbait analysis");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = resp.json().await?;
        let analysis = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyResponse)?;

        info!(chars = analysis.len(), "remote analysis complete");
        Ok(analysis)
    }
}

fn analysis_prompt(content: &str) -> String {
    format!(
        "Analyze this content for clickbait: {content}. \
         Respond with \"Yes\" or \"No\" and a short reason."
    )
}
