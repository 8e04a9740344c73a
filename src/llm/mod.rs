//! LLM provider - remote workout generation
//!
//! The provider is optional: when it is missing or fails, the service
//! falls back to the rule-based generator in [`crate::workout`].

pub mod format;
pub mod gemini;

pub use format::{format_workout_response, sanitize_html, strip_tags};
pub use gemini::GeminiClient;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("provider returned no text")]
    EmptyResponse,
    #[error("provider timed out after {0}s")]
    Timeout(u64),
}

/// Anything that turns a prompt pair into workout text
#[async_trait]
pub trait WorkoutProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, LlmError>;
}
