use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::SessionContext;
use crate::error::{AppError, MISSING_TEXT_MESSAGE};
use crate::{pages, AppState};

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub input_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub result: String,
}

pub async fn evaluate_page(
    session: SessionContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = session.require_user(&state.auth_service).await?;
    Ok(pages::evaluate(&user.username))
}

/// `POST /evaluate`. The body is parsed only after the session check so an
/// anonymous caller is always redirected, whatever it sent.
pub async fn evaluate(
    session: SessionContext,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if state.config.auth.require_login {
        session.require_user(&state.auth_service).await?;
    }

    let request = serde_json::from_slice::<EvaluateRequest>(&body).map_err(|e| {
        warn!("Rejected evaluation body: {}", e);
        AppError::ValidationError(MISSING_TEXT_MESSAGE.to_string())
    })?;

    let result = state.evaluator.evaluate(request.input_text.as_deref()).await?;
    Ok(HttpResponse::Ok().json(EvaluateResponse { result }))
}
