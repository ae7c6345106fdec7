use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_against_dummy, verify_password};
use crate::db::{User, UserRepository};
use crate::error::{AppError, AuthError, DatabaseError, UniqueField};

/// Signup and login over a [`UserRepository`].
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Creates an account. Username and email are trimmed; the password is
    /// taken verbatim and only its hash is stored.
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();
        let email = email.trim();
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields.into());
        }

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let user = User::new(username.to_string(), email.to_string(), hash_password(password)?);

        // The pre-checks can race another signup; the store has the final word.
        match self.users.create_user(&user).await {
            Ok(user) => {
                info!("Created user {} ({})", user.username, user.id);
                Ok(user)
            }
            Err(DatabaseError::Duplicate(UniqueField::Username)) => Err(AuthError::UsernameTaken.into()),
            Err(DatabaseError::Duplicate(UniqueField::Email)) => Err(AuthError::EmailTaken.into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the user owning `email` when `password` matches its stored hash.
    /// Every failure is reported as [`AuthError::InvalidCredentials`].
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials.into());
        }

        match self.users.find_by_email(email).await? {
            Some(user) if verify_password(password, &user.password_hash) => Ok(user),
            Some(user) => {
                warn!("Password mismatch for user {}", user.id);
                Err(AuthError::InvalidCredentials.into())
            }
            None => {
                verify_against_dummy(password);
                warn!("Login attempt for unknown email");
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }

    /// Resolves a session's user id. A user that no longer exists yields `None`.
    pub async fn current_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.find_by_id(user_id).await?)
    }
}
