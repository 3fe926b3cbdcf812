//! Gemini AI provider implementation.
//!
//! Posts prompt and inline-attachment parts to the `generateContent`
//! endpoint and hands back the response body verbatim.

use super::{GenerationProvider, Part, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
}

/// Process-wide Gemini client, read-only after construction.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, model, method, self.config.api_key
        )
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, model: &str, parts: Vec<Part>) -> Result<Value, ProviderError> {
        let part_count = parts.len();
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        };

        let url = self.api_url(model, "generateContent");

        tracing::debug!(model, part_count, "Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        // The response shape is not contractually stable across SDK versions
        // or call modes; hand the raw tree to the extractor instead of
        // deserializing into typed candidates here.
        response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Gemini API Request Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}
