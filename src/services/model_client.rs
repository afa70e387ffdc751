use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Seam for the text-completion backend so handlers can be exercised
/// against a mock without a live model server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str, structured: bool) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'a str>,
}

impl<'a> GenerateRequest<'a> {
    pub fn new(model: &'a str, prompt: &'a str, structured: bool) -> Self {
        Self {
            model,
            prompt,
            stream: false,
            // Backend-side JSON constraint. A hint only: the extractor never
            // assumes it was honored.
            format: structured.then_some("json"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama-backed completion client. One non-streaming request per call,
/// no retries; the shared reqwest client carries the bounded timeout.
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.ollama_base_url.clone(),
            model: config.ollama_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for OllamaClient {
    async fn complete(&self, prompt: &str, structured: bool) -> AppResult<String> {
        let body = GenerateRequest::new(&self.model, prompt, structured);

        log::info!(
            "issuing completion request: model={} structured={} prompt_len={}",
            self.model,
            structured,
            prompt.len()
        );

        let response = self
            .http
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(AppError::BackendError(format!("{}: {}", status, detail)));
        }

        let completion: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AppError::BackendError(format!("unexpected response body: {}", e)))?;

        log::info!(
            "completion received: model={} reply_len={}",
            self.model,
            completion.response.len()
        );

        Ok(completion.response.trim().to_string())
    }
}
