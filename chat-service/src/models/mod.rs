//! Request and response bodies for the relay endpoints.

use serde::{Deserialize, Serialize};

/// Successful generation payload.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}

/// One turn of the on-page conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Reply to the chat page: the extracted text plus its rendered fragment.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub result: String,
    pub html: String,
}
