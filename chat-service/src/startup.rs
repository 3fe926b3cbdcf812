//! Application startup and lifecycle management.

use crate::config::ChatConfig;
use crate::handlers::{
    app::{health_check, index},
    chat::api_chat,
    generate::{generate_from_audio, generate_from_document, generate_from_image, generate_text},
};
use crate::services::providers::gemini::{GeminiClient, GeminiConfig};
use crate::services::providers::GenerationProvider;
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::request_id::{request_id_middleware, RequestId};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state. Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: ChatConfig,
    pub provider: Arc<dyn GenerationProvider>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/generate-text", post(generate_text))
        .route("/generate-from-image", post(generate_from_image))
        .route("/generate-from-document", post(generate_from_document))
        .route("/generate-from-audio", post(generate_from_audio))
        .route("/api/chat", post(api_chat))
        .nest_service("/static", ServeDir::new("chat-service/static"))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestId>()
                    .map(|id| id.0.clone())
                    .unwrap_or_else(|| "-".to_string());

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration (port 0 binds a
    /// random port for testing).
    pub async fn build(config: ChatConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
        };
        let provider: Arc<dyn GenerationProvider> = Arc::new(GeminiClient::new(gemini_config));

        tracing::info!(
            text_model = %config.models.text_model,
            image_model = %config.models.image_model,
            audio_model = %config.models.audio_model,
            document_model = %config.models.document_model,
            "Initialized Gemini provider"
        );

        let state = AppState {
            config: config.clone(),
            provider,
        };

        let addr = format!("{}:{}", config.common.host, config.common.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        tracing::info!("chat-service listening on port {}", self.port);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
