//! Gemini Embedding Provider
//!
//! Implements the EmbeddingProvider port using Google's Generative Language
//! embedding API (`embedContent` and `batchEmbedContents`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use nvdb_application::ports::EmbeddingProvider;
use nvdb_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};
use nvdb_domain::error::{Error, Result};
use nvdb_domain::value_objects::{Embedding, TaskType};

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_GEMINI, ERROR_MSG_REQUEST_TIMEOUT,
    GEMINI_API_KEY_HEADER, GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, GEMINI_MAX_BATCH_SIZE,
};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Gemini embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use nvdb_providers::embedding::GeminiEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = GeminiEmbeddingProvider::new(
///     "AIza-your-api-key".to_string(),
///     None,
///     "models/text-embedding-004".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// assert_eq!(provider.api_model_name(), "text-embedding-004");
/// ```
pub struct GeminiEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl GeminiEmbeddingProvider {
    /// Create a new Gemini embedding provider
    ///
    /// # Arguments
    /// * `api_key` - Google AI API key
    /// * `base_url` - Optional custom base URL (defaults to Google AI API)
    /// * `model` - Model name, with or without the `models/` prefix
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the effective base URL
    pub fn base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), GEMINI_DEFAULT_BASE_URL)
    }

    /// Model name without the `models/` prefix
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{method}",
            self.base_url(),
            self.api_model_name()
        )
    }

    fn request_body(&self, text: &str, task_type: TaskType) -> Value {
        json!({
            "model": format!("models/{}", self.api_model_name()),
            "content": { "parts": [{ "text": text }] },
            "taskType": task_type.as_str(),
        })
    }

    async fn post(&self, url: &str, payload: &Value) -> Result<Value> {
        let response = self
            .http_client
            .post(url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header(GEMINI_API_KEY_HEADER, &self.api_key)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::embedding(format!("{ERROR_MSG_REQUEST_TIMEOUT} {:?}", self.timeout))
                } else {
                    Error::network_with_source("Gemini request failed", e)
                }
            })?;

        HttpResponseUtils::check_and_parse(response, "Gemini").await
    }

    /// Parse `{"values": [...]}` into an embedding
    fn parse_embedding(&self, embedding: &Value) -> Result<Embedding> {
        let values = embedding["values"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing embedding values"))?
            .iter()
            .map(|v| {
                v.as_f64()
                    .ok_or_else(|| Error::embedding("Invalid response format: non-numeric value"))
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(Embedding::new(values, self.api_model_name()))
    }

    async fn embed_chunk(&self, texts: &[String], task_type: TaskType) -> Result<Vec<Embedding>> {
        let requests: Vec<Value> = texts
            .iter()
            .map(|text| self.request_body(text, task_type))
            .collect();
        let payload = json!({ "requests": requests });

        let response = self
            .post(&self.endpoint("batchEmbedContents"), &payload)
            .await?;

        let embeddings = response["embeddings"].as_array().ok_or_else(|| {
            Error::embedding("Invalid response format: missing embeddings array")
        })?;
        if embeddings.len() != texts.len() {
            return Err(Error::embedding(format!(
                "Gemini returned {} embeddings for {} texts",
                embeddings.len(),
                texts.len()
            )));
        }

        embeddings.iter().map(|e| self.parse_embedding(e)).collect()
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed(&self, text: &str, task_type: TaskType) -> Result<Embedding> {
        let payload = self.request_body(text, task_type);
        let response = self.post(&self.endpoint("embedContent"), &payload).await?;
        self.parse_embedding(&response["embedding"])
    }

    async fn embed_batch(&self, texts: &[String], task_type: TaskType) -> Result<Vec<Embedding>> {
        let mut results = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(GEMINI_MAX_BATCH_SIZE) {
            results.extend(self.embed_chunk(chunk, task_type).await?);
        }
        Ok(results)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_GEMINI
    }

    fn model(&self) -> &str {
        self.api_model_name()
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn gemini_embedding_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| "Gemini requires api_key".to_string())?;
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| GEMINI_DEFAULT_MODEL.to_string());
    let timeout = constructor::timeout_or_default(config.timeout_secs);
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    Ok(Arc::new(GeminiEmbeddingProvider::new(
        api_key,
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    )))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static GEMINI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "gemini",
    description: "Google Gemini embedding provider (text-embedding-004)",
    factory: gemini_embedding_factory,
};
