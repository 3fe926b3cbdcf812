use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

/// Model identifiers, one per input modality.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub text_model: String,
    pub image_model: String,
    pub audio_model: String,
    pub document_model: String,
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ChatConfig {
            common,
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("CHAT_TEXT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                image_model: get_env("CHAT_IMAGE_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                audio_model: get_env("CHAT_AUDIO_MODEL", Some("gemini-2.0-flash"), is_prod)?,
                document_model: get_env("CHAT_DOCUMENT_MODEL", Some("gemini-2.0-flash"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
