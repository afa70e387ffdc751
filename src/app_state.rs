use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::model_client::{CompletionClient, OllamaClient},
};

/// Per-process shared state. Everything here is immutable after startup;
/// requests share the reqwest connection pool and nothing else.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub http: reqwest::Client,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.model_timeout_secs))
            .build()
            .map_err(|e| AppError::InternalError(format!("failed to build HTTP client: {}", e)))?;

        let completion = Arc::new(OllamaClient::new(http.clone(), &config));

        Ok(Self {
            completion,
            http,
            config: Arc::new(config),
        })
    }

    /// Constructor with an injected completion backend, used by tests to
    /// swap the live model server for a stub.
    pub fn with_completion_client(config: Config, completion: Arc<dyn CompletionClient>) -> Self {
        Self {
            completion,
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }
}
