//! Gemini implementation of the LLM client.
//!
//! Thin wrapper around the `generateContent` REST endpoint. Failures (auth,
//! quota, network, empty candidates) surface as errors to the caller; there is
//! no retry or timeout beyond what `reqwest` itself provides.

use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::base::{config::Config, types::Res};

use super::{GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the gemini implementation.

impl LlmClient {
    pub fn gemini(config: &Config) -> Self {
        let client = GeminiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Wire types for the `generateContent` endpoint.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

// Specific implementations.

/// Gemini LLM client implementation.
#[derive(Clone)]
pub struct GeminiLlmClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiLlmClient {
    /// Create a new Gemini LLM client.
    #[instrument(name = "GeminiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl GenericLlmClient for GeminiLlmClient {
    #[instrument(skip_all)]
    async fn generate(&self, prompt: &str) -> Res<String> {
        debug!("Generating reply with model `{}`", self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| candidate.content.parts.into_iter().map(|part| part.text).collect::<Vec<_>>().join(""))
            .ok_or_else(|| anyhow!("Gemini returned no candidates"))?;

        Ok(text)
    }
}
