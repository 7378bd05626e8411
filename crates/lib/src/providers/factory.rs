//! # AI Provider Factory
//!
//! Centralizes construction of [`AiProvider`] instances from environment
//! configuration so every consumer (pipeline, examples, tests) resolves
//! providers the same way.
//!
//! Recognized variables:
//! - `AI_MODEL`: model name. Names starting with `gemini` select the Gemini
//!   provider (default: `gemini-2.0-flash`).
//! - `AI_API_KEY`: API key for hosted providers.
//! - `LOCAL_AI_API_URL`: chat-completions endpoint for local models.

use crate::{
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
};
use tracing::info;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Creates an AI provider based on the `AI_MODEL` environment variable.
/// A `.env` file in the working directory is honored when present.
pub fn create_provider_from_env() -> Result<Box<dyn AiProvider>, PromptError> {
    dotenvy::dotenv().ok();
    let model_name = std::env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    create_provider(&model_name)
}

/// Creates an AI provider for the given model name.
pub fn create_provider(model_name: &str) -> Result<Box<dyn AiProvider>, PromptError> {
    info!("Creating AI provider for model: '{model_name}'");

    if model_name.starts_with("gemini") {
        let api_key = std::env::var("AI_API_KEY").map_err(|_| {
            PromptError::MissingAiProvider(
                "AI_API_KEY must be set to use Gemini models.".to_string(),
            )
        })?;
        let api_url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{model_name}:generateContent"
        );
        Ok(Box::new(GeminiProvider::new(api_url, api_key)?))
    } else {
        let api_url = std::env::var("LOCAL_AI_API_URL").map_err(|_| {
            PromptError::MissingAiProvider(
                "LOCAL_AI_API_URL must be set to use local models.".to_string(),
            )
        })?;
        let api_key = std::env::var("AI_API_KEY").ok();
        Ok(Box::new(LocalAiProvider::new(
            api_url,
            api_key,
            Some(model_name.to_string()),
        )?))
    }
}
