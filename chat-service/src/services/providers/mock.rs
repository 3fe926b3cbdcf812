//! Mock provider implementation for testing.

use super::{GenerationProvider, Part, ProviderError};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Mock generation provider returning a canned result or a canned failure.
pub struct MockProvider {
    result: Result<Value, String>,
}

impl MockProvider {
    /// Respond with a well-formed single-candidate result wrapping `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            result: Ok(json!({
                "candidates": [
                    { "content": { "parts": [{ "text": text }] } }
                ]
            })),
        }
    }

    /// Respond with `value` verbatim.
    pub fn with_value(value: Value) -> Self {
        Self { result: Ok(value) }
    }

    /// Fail every call with an API error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, _model: &str, _parts: Vec<Part>) -> Result<Value, ProviderError> {
        match &self.result {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
