use std::fmt;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::SummarizationError;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the chat-completion API client
#[derive(Clone)]
pub struct OpenAiConfig {
    /// API key (from OPENAI_API_KEY env var), passed as a bearer token
    pub api_key: String,
    /// Model to use (e.g., "gpt-4o-mini")
    pub model: String,
    /// Temperature (0-2, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in the completion
    pub max_tokens: u32,
    /// Base URL of the endpoint (overridable for alternate deployments)
    pub base_url: String,
    /// Bound on the single request's round trip
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, SummarizationError> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| SummarizationError::MissingApiKey)?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.5,
            max_tokens: 150,
            base_url,
            timeout: Duration::from_secs(60),
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            temperature: 0.5,
            max_tokens: 150,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

// The credential must never leak into logs, so Debug redacts it
impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Chat-completion API client
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to construct HTTP client");

        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send a system + user message pair and return the trimmed text of
    /// the first completion. Exactly one request per call; no retries.
    pub async fn send_chat(&self, system: &str, user: &str) -> Result<String, SummarizationError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizationError::Api { status, body });
        }

        let response: ChatResponse = response.json().await?;
        extract_summary(&response)
    }
}

/// Trimmed text of the first returned completion
pub(crate) fn extract_summary(response: &ChatResponse) -> Result<String, SummarizationError> {
    response
        .choices
        .first()
        .map(|choice| choice.message.content.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(SummarizationError::EmptyResponse)
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_summary_trims_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  Average pay is $60k, mostly Engineering.\n"}},
                {"message": {"role": "assistant", "content": "an unused second candidate"}}
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        let summary = extract_summary(&response).unwrap();

        assert_eq!(summary, "Average pay is $60k, mostly Engineering.");
    }

    #[test]
    fn test_extract_summary_empty_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            extract_summary(&response),
            Err(SummarizationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_extract_summary_blank_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "   "}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            extract_summary(&response),
            Err(SummarizationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = OpenAiConfig::new("sk-secret-value".to_string(), "gpt-4o-mini".to_string());
        let debug = format!("{:?}", config);

        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("[redacted]"));
    }
}
