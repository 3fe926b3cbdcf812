//! Upstream generation provider abstraction.
//!
//! A trait seam over the generative API so the real Gemini client and the
//! test mock are interchangeable behind `Arc<dyn GenerationProvider>`.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl From<ProviderError> for service_core::error::AppError {
    fn from(err: ProviderError) -> Self {
        service_core::error::AppError::Upstream(anyhow::Error::new(err))
    }
}

/// One part of an upstream request payload: plain text, or an inline
/// base64-encoded attachment with an explicit MIME type.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Base64-encode raw attachment bytes into an inline data part.
    pub fn inline_data(mime_type: &str, data: &[u8]) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.to_string(),
                data: general_purpose::STANDARD.encode(data),
            },
        }
    }
}

/// Trait for generation providers (e.g. Gemini).
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Invoke the given model and return the raw, loosely-structured
    /// response body. Callers locate the text payload downstream; the
    /// provider makes no assumption about the response shape.
    async fn generate(
        &self,
        model: &str,
        parts: Vec<Part>,
    ) -> Result<serde_json::Value, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
