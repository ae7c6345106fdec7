//! Startup idea evaluation: validate the idea, build the prompt, make one
//! generation call and map its outcome.

pub mod handlers;
mod prompt;

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::{AppError, GenerationError, MISSING_TEXT_MESSAGE};
use crate::generation::TextGenerator;

pub use prompt::build_prompt;

pub struct EvaluationService {
    generator: Arc<dyn TextGenerator>,
}

impl EvaluationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Evaluates `input`. Blank input fails with a validation error before
    /// any upstream call. Upstream failures, including an empty generation,
    /// are logged here and returned as [`AppError::GenerationError`].
    pub async fn evaluate(&self, input: Option<&str>) -> Result<String, AppError> {
        let idea = input.map(str::trim).unwrap_or_default();
        if idea.is_empty() {
            return Err(AppError::ValidationError(MISSING_TEXT_MESSAGE.to_string()));
        }
        debug!("Evaluating idea ({} chars)", idea.chars().count());

        let prompt = build_prompt(idea);

        let outcome = match self.generator.generate(&prompt).await {
            Ok(response) => match response.first_text().map(str::trim) {
                Some(text) if !text.is_empty() => Ok(text.to_string()),
                _ => Err(GenerationError::EmptyResponse),
            },
            Err(e) => Err(e),
        };

        match outcome {
            Ok(text) => {
                info!("Evaluation generated ({} chars)", text.chars().count());
                Ok(text)
            }
            Err(e) => {
                error!("Evaluation failed: {}", e);
                Err(e.into())
            }
        }
    }
}
