#![allow(dead_code)] // Not every test binary uses every helper

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use async_trait::async_trait;
use mockall::mock;
use startup_evaluator::auth::SESSION_COOKIE_NAME;
use startup_evaluator::error::GenerationError;
use startup_evaluator::generation::{GenerateResponse, Generation, TextGenerator};
use startup_evaluator::{AppState, InMemoryUserRepository, Settings};
use std::sync::Arc;

mock! {
    pub Generator {}

    #[async_trait]
    impl TextGenerator for Generator {
        async fn generate(&self, prompt: &str) -> Result<GenerateResponse, GenerationError>;
    }
}

/// Builds an initialised test service around `$state` with sessions and all routes.
macro_rules! test_app {
    ($state:expr) => {{
        let state: startup_evaluator::AppState = $state;
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(startup_evaluator::auth::session_middleware(&state.config.auth))
                .app_data(actix_web::web::Data::new(state))
                .configure(startup_evaluator::configure_routes),
        )
        .await
    }};
}

pub fn generation(text: &str) -> GenerateResponse {
    GenerateResponse {
        id: Some("gen-1".to_string()),
        generations: vec![Generation {
            id: Some("g-1".to_string()),
            text: text.to_string(),
        }],
    }
}

pub fn test_settings() -> Settings {
    Settings::new_for_test().expect("Failed to load test config")
}

pub fn state_with(generator: MockGenerator) -> (AppState, InMemoryUserRepository) {
    state_with_settings(test_settings(), generator)
}

pub fn state_with_settings(settings: Settings, generator: MockGenerator) -> (AppState, InMemoryUserRepository) {
    let users = InMemoryUserRepository::new();
    let state = AppState::from_parts(settings, Arc::new(users.clone()), Arc::new(generator));
    (state, users)
}

/// A generator that fails the test if it is ever called.
pub fn unused_generator() -> MockGenerator {
    let mut generator = MockGenerator::new();
    generator.expect_generate().never();
    generator
}

pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(|cookie| cookie.into_owned())
}

pub fn location<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Posts the signup form and returns the response.
macro_rules! signup {
    ($app:expr, $username:expr, $email:expr, $password:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::post()
                .uri("/signup")
                .set_form([("username", $username), ("email", $email), ("password", $password)])
                .to_request(),
        )
        .await
    };
}

/// Posts the login form and returns the response.
macro_rules! login {
    ($app:expr, $email:expr, $password:expr) => {
        actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::post()
                .uri("/login")
                .set_form([("email", $email), ("password", $password)])
                .to_request(),
        )
        .await
    };
}
