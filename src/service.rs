//! Workout service - validate, store, generate, fall back
//!
//! A configured provider is asked first; its failures never reach the
//! caller. The rule-based plan is used instead and marked as a demo.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::db::{Database, WorkoutHistory};
use crate::llm::{LlmError, WorkoutProvider, format_workout_response, sanitize_html};
use crate::params::{RawWorkoutRequest, ValidationError, WorkoutParameters, validate};
use crate::prompt::{SYSTEM_PROMPT, format_user_prompt};
use crate::workout::synthesize;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("storage error: {0:#}")]
    Store(anyhow::Error),
}

/// What the generate operation hands back
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub parameters: WorkoutParameters,
    pub content: String,
    pub is_demo: bool,
}

pub struct WorkoutService {
    db: Database,
    provider: Option<Box<dyn WorkoutProvider>>,
    timeout: Duration,
}

impl WorkoutService {
    pub fn new(db: Database, provider: Option<Box<dyn WorkoutProvider>>, timeout: Duration) -> Self {
        Self { db, provider, timeout }
    }

    /// Service without a provider; every plan is rule-based
    pub fn offline(db: Database) -> Self {
        Self::new(db, None, Duration::ZERO)
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn generate(&self, raw: &RawWorkoutRequest) -> Result<WorkoutResponse, GenerateError> {
        let parameters = validate(raw)?;
        let request = self.db.create_request(&parameters).map_err(GenerateError::Store)?;

        let (content, is_demo) = match self.ask_provider(&parameters).await {
            Some(content) => (content, false),
            None => (synthesize(&parameters).to_html(), true),
        };

        self.db
            .save_content(request.id, &content, is_demo)
            .map_err(GenerateError::Store)?;
        info!(
            "Workout {} generated ({})",
            request.id,
            if is_demo { "demo" } else { "AI" }
        );

        Ok(WorkoutResponse { parameters, content, is_demo })
    }

    /// Provider output ready for display, or None to fall back
    async fn ask_provider(&self, parameters: &WorkoutParameters) -> Option<String> {
        let Some(provider) = &self.provider else {
            info!("No provider configured, using rule-based workout");
            return None;
        };

        let user_prompt = format_user_prompt(parameters);
        let result = match tokio::time::timeout(
            self.timeout,
            provider.generate(SYSTEM_PROMPT, &user_prompt),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.timeout.as_secs())),
        };

        match result {
            Ok(text) => {
                let html = sanitize_html(&format_workout_response(&text));
                if html.trim().is_empty() {
                    warn!("{} returned nothing usable, using rule-based workout", provider.name());
                    None
                } else {
                    Some(html)
                }
            }
            Err(e) => {
                warn!("{} failed: {}, using rule-based workout", provider.name(), e);
                None
            }
        }
    }

    /// Stored workouts, newest first
    pub fn history(&self, limit: usize) -> anyhow::Result<Vec<WorkoutHistory>> {
        let mut history = self.db.get_history()?;
        history.truncate(limit);
        Ok(history)
    }
}
