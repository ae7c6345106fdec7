//! Authentication module
//!
//! Password hashing, signup/login over the user store, and the cookie
//! session that marks a browser as signed in.

pub mod handlers;
pub mod password;
mod service;
mod session;

pub use service::AuthService;
pub use session::{session_key, session_middleware, SessionContext, SESSION_COOKIE_NAME};
