use thiserror::Error;

/// Custom error types for calls to the external semantic-extraction service.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize the AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider is not configured: {0}")]
    MissingAiProvider(String),
    #[error("API key is missing")]
    MissingApiKey,
}

/// Custom error types for constructing the deterministic components.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid token pattern: {0}")]
    Regex(#[from] regex::Error),
}
