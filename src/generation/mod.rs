//! Text generation backends.
//!
//! The evaluation flow only depends on [`TextGenerator`]; [`CohereClient`]
//! is the HTTP implementation talking to Cohere's generate endpoint.

mod cohere;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub use cohere::{CohereClient, GenerationParams};

/// One completion returned by the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub generations: Vec<Generation>,
}

impl GenerateResponse {
    pub fn first_text(&self) -> Option<&str> {
        self.generations.first().map(|g| g.text.as_str())
    }
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issues one generation request for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, GenerationError>;
}
