//! Generation endpoints: plain text plus the three attachment modalities.

use crate::models::GenerateResponse;
use crate::services::extract::extract_text;
use crate::services::providers::Part;
use crate::startup::AppState;
use anyhow::anyhow;
use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::Value;
use service_core::error::AppError;

/// `POST /generate-text`
pub async fn generate_text(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<GenerateResponse>, AppError> {
    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::BadRequest(anyhow!("prompt is required and must be a string")))?;

    let result = state
        .provider
        .generate(&state.config.models.text_model, vec![Part::text(prompt)])
        .await?;

    Ok(Json(GenerateResponse {
        result: extract_text(&result),
    }))
}

/// `POST /generate-from-image`
pub async fn generate_from_image(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let model = state.config.models.image_model.clone();
    generate_with_attachment(
        &state,
        &model,
        multipart,
        "image",
        "describe the following image",
    )
    .await
}

/// `POST /generate-from-document`
pub async fn generate_from_document(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let model = state.config.models.document_model.clone();
    generate_with_attachment(
        &state,
        &model,
        multipart,
        "document",
        "summarize the following document",
    )
    .await
}

/// `POST /generate-from-audio`
pub async fn generate_from_audio(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let model = state.config.models.audio_model.clone();
    generate_with_attachment(
        &state,
        &model,
        multipart,
        "audio",
        "transcribe the following audio",
    )
    .await
}

struct Attachment {
    mime_type: String,
    data: Vec<u8>,
}

/// Pull the optional prompt text and the named binary field out of a
/// multipart form. Unrecognized fields are skipped.
async fn read_upload(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<(Option<String>, Option<Attachment>), AppError> {
    let mut prompt = None;
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(anyhow!("invalid multipart payload: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "prompt" {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(anyhow!("failed to read prompt field: {}", e)))?;
            prompt = Some(text);
        } else if name == field_name {
            let mime_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            // Buffered fully in memory before base64 encoding.
            let data = field.bytes().await.map_err(|e| {
                AppError::BadRequest(anyhow!("failed to read {} field: {}", field_name, e))
            })?;
            attachment = Some(Attachment {
                mime_type,
                data: data.to_vec(),
            });
        }
    }

    Ok((prompt, attachment))
}

async fn generate_with_attachment(
    state: &AppState,
    model: &str,
    multipart: Multipart,
    field_name: &str,
    default_prompt: &str,
) -> Result<Json<GenerateResponse>, AppError> {
    let (prompt, attachment) = read_upload(multipart, field_name).await?;

    let attachment = attachment
        .ok_or_else(|| AppError::BadRequest(anyhow!("{} file is required", field_name)))?;

    let prompt = prompt
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| default_prompt.to_string());

    tracing::info!(
        model,
        mime_type = %attachment.mime_type,
        size_bytes = attachment.data.len(),
        "Forwarding {} request",
        field_name
    );

    let parts = vec![
        Part::text(&prompt),
        Part::inline_data(&attachment.mime_type, &attachment.data),
    ];

    let result = state.provider.generate(model, parts).await?;

    Ok(Json(GenerateResponse {
        result: extract_text(&result),
    }))
}
