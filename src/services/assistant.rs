use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the generative-text upstream
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Upstream returned no candidates")]
    EmptyReply,
}

/// Persona preamble appended to every prompt, as the product ships it
const SYSTEM_CONTEXT: &str = "Context: You are a premium AI Influencer Matching Assistant \
for the 'InfluMatch' platform. Your tone is professional, strategic, and high-end. \
Keep answers concise but insightful.";

/// Client for the Gemini generateContent endpoint
///
/// The assistant is flavor text for the dashboard chatbot; nothing in the
/// scoring path depends on it, and the service runs fine without a key
/// (the route reports unavailable instead).
pub struct AssistantClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl AssistantClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    /// Generate a chatbot reply for a user prompt
    pub async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            urlencoding::encode(&self.api_key),
        );

        let payload = json!({
            "contents": [{
                "parts": [{
                    "text": format!("{}\n\n{}", prompt, SYSTEM_CONTEXT),
                }]
            }]
        });

        tracing::debug!("Calling assistant model: {}", self.model);

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::warn!("Assistant upstream error {}: {}", status, body);
            return Err(AssistantError::ApiError(format!(
                "Upstream returned {}",
                status
            )));
        }

        let body: Value = response.json().await?;

        let reply = body
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.pointer("/content/parts/0/text"))
            .and_then(|t| t.as_str())
            .ok_or(AssistantError::EmptyReply)?;

        if reply.is_empty() {
            return Err(AssistantError::EmptyReply);
        }

        Ok(reply.to_string())
    }
}
