use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::auth::SessionContext;
use crate::error::{AppError, AuthError};
use crate::{pages, AppState};

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn auth_status(e: AuthError) -> StatusCode {
    AppError::AuthError(e).status_code()
}

pub async fn signup_page() -> HttpResponse {
    pages::signup(StatusCode::OK, "")
}

pub async fn signup(
    form: web::Form<SignupForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!("Received signup request for username: {}", form.username.trim());

    match state.auth_service.signup(&form.username, &form.email, &form.password).await {
        Ok(user) => {
            info!("Signup successful for user {}", user.id);
            Ok(redirect("/login"))
        }
        Err(AppError::AuthError(e)) => {
            warn!("Signup rejected: {}", e);
            Ok(pages::signup(auth_status(e), &e.to_string()))
        }
        Err(e) => {
            error!("Signup failed: {}", e);
            Err(e)
        }
    }
}

pub async fn login_page() -> HttpResponse {
    pages::login(StatusCode::OK, "")
}

pub async fn login(
    form: web::Form<LoginForm>,
    session: SessionContext,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match state.auth_service.authenticate(&form.email, &form.password).await {
        Ok(user) => {
            session.persist_user(user.id)?;
            info!("Login successful for user {}", user.id);
            Ok(redirect("/evaluate_page"))
        }
        Err(AppError::AuthError(e)) => {
            Ok(pages::login(auth_status(e), &e.to_string()))
        }
        Err(e) => {
            error!("Login failed: {}", e);
            Err(e)
        }
    }
}

pub async fn logout(session: SessionContext) -> Result<HttpResponse, AppError> {
    if let Some(user_id) = session.user_id()? {
        info!("Logout for user {}", user_id);
    }
    session.clear();
    Ok(redirect("/login"))
}
