//! Google Generative Language client.
//!
//! Thin REST wrapper around the `generateContent` endpoint. The credential,
//! model and endpoint are injected at construction -- the client never reads
//! the process environment. The endpoint override exists for tests against a
//! local mock server.

use std::time::Duration;

use serde_json::json;

use super::AdviceGenerator;
use crate::error::AdviceError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the generative-text service.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AdviceError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(AdviceError::MissingCredential);
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the service base URL (used by tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn call(&self, prompt: &str) -> Result<String, AdviceError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdviceError::Api {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body_text = response.text().await?;
        let payload: serde_json::Value = serde_json::from_str(&body_text)
            .map_err(|e| AdviceError::MalformedResponse(e.to_string()))?;

        // Response shape: { "candidates": [ { "content": { "parts": [ { "text": ... } ] } } ] }
        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AdviceError::MalformedResponse("no candidate text in response".to_string())
            })
    }
}

/// Cap an error body at 1 KiB for the error message, backing off to the
/// nearest char boundary so multi-byte text never splits.
fn truncate_body(body: &str) -> String {
    const MAX_BODY: usize = 1024;
    if body.len() <= MAX_BODY {
        return body.to_string();
    }
    let mut cut = MAX_BODY;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

impl AdviceGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AdviceError> {
        self.call(prompt).await
    }
}
