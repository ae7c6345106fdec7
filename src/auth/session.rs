//! Cookie session access for handlers.
//!
//! Handlers take a [`SessionContext`] argument instead of reaching into the
//! raw actix session, so the only state a session carries is the user id.

use actix_session::config::{CookieContentSecurity, PersistentSession};
use actix_session::storage::CookieSessionStore;
use actix_session::{Session, SessionMiddleware};
use actix_web::cookie::{time, Key, SameSite};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sha2::{Digest, Sha512};
use tracing::warn;
use uuid::Uuid;

use crate::auth::AuthService;
use crate::config::AuthConfig;
use crate::db::User;
use crate::error::{AppError, AuthError};

pub(crate) const USER_ID_KEY: &str = "user_id";
pub const SESSION_COOKIE_NAME: &str = "session";

/// Derives the 64-byte cookie key from the configured secret, whatever its length.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Private (encrypted) cookie sessions expiring after `session_ttl_hours`.
pub fn session_middleware(config: &AuthConfig) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), session_key(&config.session_secret))
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_path("/".to_string())
        .cookie_secure(config.cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .cookie_content_security(CookieContentSecurity::Private)
        .session_lifecycle(
            PersistentSession::default()
                .session_ttl(time::Duration::hours(config.session_ttl_hours)),
        )
        .build()
}

#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Marks the session as authenticated. The session id is renewed first.
    pub fn persist_user(&self, user_id: Uuid) -> Result<(), AppError> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.to_string())
            .map_err(|e| AppError::InternalError(format!("failed to persist session: {}", e)))
    }

    /// The authenticated user id, if any. Tampered values count as anonymous.
    pub fn user_id(&self) -> Result<Option<Uuid>, AppError> {
        let raw = self
            .0
            .get::<String>(USER_ID_KEY)
            .map_err(|e| AppError::InternalError(format!("failed to read session: {}", e)))?;

        match raw {
            Some(raw) => match Uuid::parse_str(&raw) {
                Ok(id) => Ok(Some(id)),
                Err(e) => {
                    warn!("Invalid user id in session cookie: {}", e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    pub fn require_user_id(&self) -> Result<Uuid, AppError> {
        self.user_id()?
            .ok_or(AppError::AuthError(AuthError::LoginRequired))
    }

    /// Loads the signed-in user. A session pointing at a user that no longer
    /// exists is cleared and treated as anonymous.
    pub async fn require_user(&self, auth: &AuthService) -> Result<User, AppError> {
        let user_id = self.require_user_id()?;
        match auth.current_user(user_id).await? {
            Some(user) => Ok(user),
            None => {
                warn!("Session refers to unknown user {}", user_id);
                self.clear();
                Err(AuthError::LoginRequired.into())
            }
        }
    }

    /// Drops all session state; the cookie is removed on the response.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
