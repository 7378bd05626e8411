pub mod gemini;
pub mod local;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with the external semantic-extraction service.
///
/// This defines the single boundary the engine has with non-deterministic
/// intelligence: a system prompt plus a user prompt in, free text out.
/// Everything the pipeline asks of a model (resume structuring, job
/// structuring, scoring with rationale, improvement planning) goes through
/// this one call.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
