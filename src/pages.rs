//! Embedded HTML pages.

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::HttpResponse;

const INDEX: &str = include_str!("../templates/index.html");
const SIGNUP: &str = include_str!("../templates/signup.html");
const LOGIN: &str = include_str!("../templates/login.html");
const EVALUATE: &str = include_str!("../templates/evaluate.html");

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

pub fn index() -> HttpResponse {
    html(StatusCode::OK, INDEX.to_string())
}

pub fn signup(status: StatusCode, message: &str) -> HttpResponse {
    html(status, SIGNUP.replace("{{message}}", &escape_html(message)))
}

pub fn login(status: StatusCode, message: &str) -> HttpResponse {
    html(status, LOGIN.replace("{{message}}", &escape_html(message)))
}

pub fn evaluate(username: &str) -> HttpResponse {
    html(StatusCode::OK, EVALUATE.replace("{{username}}", &escape_html(username)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#x27;y&#x27;&lt;/b&gt;");
    }

    #[actix_web::test]
    async fn test_username_is_escaped() {
        let response = evaluate("<script>");
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains("Hello, &lt;script&gt;"));
        assert!(!html.contains("{{username}}"));
    }

    #[test]
    fn test_message_slot_is_filled() {
        let response = login(StatusCode::UNAUTHORIZED, "Invalid email or password.");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
