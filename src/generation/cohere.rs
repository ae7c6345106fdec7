use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use url::Url;

use crate::config::GenerationConfig;
use crate::error::{AppError, GenerationError};
use crate::generation::{GenerateResponse, TextGenerator};

const GENERATE_PATH: &str = "v1/generate";

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub k: u32,
    pub p: f64,
}

impl From<&GenerationConfig> for GenerationParams {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            k: config.k,
            p: config.p,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
    k: u32,
    p: f64,
    return_likelihoods: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

pub struct CohereClient {
    http: reqwest::Client,
    endpoint: Url,
    params: GenerationParams,
}

impl CohereClient {
    pub fn new(config: &GenerationConfig) -> Result<Self, AppError> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| AppError::ConfigError(format!("Invalid generation base URL: {}", e)))?;
        // Keep any path prefix of the base URL when joining.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base
            .join(GENERATE_PATH)
            .map_err(|e| AppError::ConfigError(format!("Invalid generation base URL: {}", e)))?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key.trim()))
            .map_err(|_| AppError::ConfigError("Generation API key contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            params: GenerationParams::from(config),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for CohereClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateResponse, GenerationError> {
        let body = GenerateRequest {
            model: &self.params.model,
            prompt,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            k: self.params.k,
            p: self.params.p,
            return_likelihoods: "NONE",
        };

        debug!("Sending generation request to {}", self.endpoint);
        let response = self.http.post(self.endpoint.clone()).json(&body).send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            error!("Generation API returned {}: {}", status, message);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<GenerateResponse>(&bytes)
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))
    }
}
