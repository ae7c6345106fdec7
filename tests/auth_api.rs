#[macro_use]
mod common;

use actix_web::cookie::time::Duration;
use actix_web::http::StatusCode;
use actix_web::test;
use common::{location, session_cookie, state_with, state_with_settings, test_settings, unused_generator};
use startup_evaluator::UserRepository;

fn body_text(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

#[actix_web::test]
async fn test_pages_render() {
    let (state, _) = state_with(unused_generator());
    let app = test_app!(state);

    for uri in ["/", "/signup", "/login"] {
        let response = test::TestRequest::get().uri(uri).send_request(&app).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {}", uri);
    }
}

#[test_log::test(actix_web::test)]
async fn test_register_and_login() {
    let (state, users) = state_with(unused_generator());
    let app = test_app!(state);

    let signup_response = signup!(app, "alice", "alice@example.com", "password123");
    assert_eq!(signup_response.status(), StatusCode::FOUND);
    assert_eq!(location(&signup_response).as_deref(), Some("/login"));

    let stored = users.find_by_email("alice@example.com").await.unwrap().unwrap();
    assert_eq!(stored.username, "alice");
    assert_ne!(stored.password_hash, "password123");

    let login_response = login!(app, "alice@example.com", "password123");
    assert_eq!(login_response.status(), StatusCode::FOUND);
    assert_eq!(location(&login_response).as_deref(), Some("/evaluate_page"));
    assert!(session_cookie(&login_response).is_some());
}

#[actix_web::test]
async fn test_duplicate_signup_is_rejected() {
    let (state, users) = state_with(unused_generator());
    let app = test_app!(state);

    signup!(app, "alice", "alice@example.com", "password123");

    let same_username = signup!(app, "alice", "other@example.com", "password123");
    assert_eq!(same_username.status(), StatusCode::CONFLICT);
    let html = body_text(&test::read_body(same_username).await);
    assert!(html.contains("Username already taken."));

    let same_email = signup!(app, "bob", "alice@example.com", "password123");
    assert_eq!(same_email.status(), StatusCode::CONFLICT);
    let html = body_text(&test::read_body(same_email).await);
    assert!(html.contains("Email already registered."));

    assert_eq!(users.len().await, 1);
}

#[actix_web::test]
async fn test_signup_requires_every_field() {
    let (state, users) = state_with(unused_generator());
    let app = test_app!(state);

    let response = signup!(app, "alice", "alice@example.com", "");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(&test::read_body(response).await).contains("All fields are required."));

    let response = test::TestRequest::post()
        .uri("/signup")
        .set_form([("username", "alice")])
        .send_request(&app)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert!(users.is_empty().await);
}

#[actix_web::test]
async fn test_invalid_login_is_generic() {
    let (state, _) = state_with(unused_generator());
    let app = test_app!(state);

    signup!(app, "alice", "alice@example.com", "password123");

    let wrong_password = login!(app, "alice@example.com", "wrongpassword");
    let unknown_email = login!(app, "nonexistent@example.com", "password123");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    assert!(session_cookie(&wrong_password).is_none());

    let wrong_password = body_text(&test::read_body(wrong_password).await);
    let unknown_email = body_text(&test::read_body(unknown_email).await);
    assert!(wrong_password.contains("Invalid email or password."));
    assert_eq!(wrong_password, unknown_email);
}

#[actix_web::test]
async fn test_logout_without_session_redirects() {
    let (state, _) = state_with(unused_generator());
    let app = test_app!(state);

    let response = test::TestRequest::get().uri("/logout").send_request(&app).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response).as_deref(), Some("/login"));
}

#[actix_web::test]
async fn test_session_cookie_expires_after_configured_ttl() {
    for ttl_hours in [24, 2] {
        let mut settings = test_settings();
        settings.auth.session_ttl_hours = ttl_hours;
        let (state, _) = state_with_settings(settings, unused_generator());
        let app = test_app!(state);

        signup!(app, "alice", "alice@example.com", "password123");
        let response = login!(app, "alice@example.com", "password123");
        assert_eq!(response.status(), StatusCode::FOUND);

        let cookie = session_cookie(&response).expect("login sets a session cookie");
        assert_eq!(cookie.max_age(), Some(Duration::hours(ttl_hours)));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
