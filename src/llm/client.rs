//! Chat completion client for the external text-generation capability

use crate::config::ChatConfig;
use crate::error::{AtsError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The seam between the pipeline and whatever produces text completions.
/// The pipeline only ever needs the assistant's reply as a single blob.
pub trait ChatCompletion {
    fn complete(
        &self,
        messages: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Groq chat-completions client. Constructed once at startup and passed by
/// reference into every request; the credential is read from the
/// environment exactly once, at construction.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    config: ChatConfig,
}

impl GroqClient {
    /// Build a client from `GROQ_API_KEY`. A missing credential is a
    /// startup-time fatal condition, not a per-request error.
    pub fn from_env(config: ChatConfig) -> Result<Self> {
        let api_key = env::var("GROQ_API_KEY").map_err(|_| {
            AtsError::Configuration("GROQ_API_KEY environment variable not set".to_string())
        })?;
        Ok(Self::new(api_key, config))
    }

    pub fn new(api_key: String, config: ChatConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            config,
        }
    }
}

impl ChatCompletion for GroqClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(
            "Sending chat completion request ({} messages) to {}",
            messages.len(),
            self.config.model
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AtsError::Transport(format!(
                "Chat API returned {}: {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AtsError::Transport("Chat API returned no choices".to_string()))?;

        info!("Received chat completion ({} chars)", content.len());
        Ok(content.trim().to_string())
    }
}
