use crate::models::{ChatRequest, ChatResponse};
use crate::services::extract::extract_text;
use crate::services::markdown::render_markdown;
use crate::services::providers::Part;
use crate::startup::AppState;
use anyhow::anyhow;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// `POST /api/chat`
///
/// Stateless: only the newest message goes upstream; earlier turns are
/// display-only on the page.
pub async fn api_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let prompt = body
        .messages
        .last()
        .map(|m| m.content.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow!("message text is required")))?;

    let raw = state
        .provider
        .generate(&state.config.models.text_model, vec![Part::text(&prompt)])
        .await?;

    let result = extract_text(&raw);
    let html = render_markdown(&result);

    Ok(Json(ChatResponse { result, html }))
}
