use thiserror::Error;
use actix_web::{ResponseError, HttpResponse, http::{header, StatusCode}};
use serde_json::json;

/// Body returned for every upstream generation failure.
pub const GENERATION_FAILURE_MESSAGE: &str = "Error communicating with Cohere API";

/// Body returned when the idea text is missing or blank.
pub const MISSING_TEXT_MESSAGE: &str = "Text not provided!";

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    AuthError(#[from] AuthError),

    #[error("Generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    /// The message a client is allowed to see. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::AuthError(e) => e.to_string(),
            AppError::ValidationError(message) => message.clone(),
            AppError::GenerationError(_) => GENERATION_FAILURE_MESSAGE.to_string(),
            AppError::DatabaseError(_)
            | AppError::ConfigError(_)
            | AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.into())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::DatabaseError(DatabaseError::MigrationError(err.to_string()))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::GenerationError(err.into())
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status == StatusCode::FOUND {
            return HttpResponse::Found()
                .insert_header((header::LOCATION, "/login"))
                .finish();
        }
        HttpResponse::build(status).json(json!({ "error": self.public_message() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthError(e) => match e {
                AuthError::LoginRequired => StatusCode::FOUND,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::MissingFields => StatusCode::BAD_REQUEST,
                AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            },
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures a visitor can cause on the signup, login and guarded routes.
/// The display strings are shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Login required.")]
    LoginRequired,

    #[error("All fields are required.")]
    MissingFields,

    #[error("Username already taken.")]
    UsernameTaken,

    #[error("Email already registered.")]
    EmailTaken,
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("API response could not be decoded: {0}")]
    InvalidResponse(String),

    #[error("API returned no generations")]
    EmptyResponse,
}

/// Unique columns of the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueField::Username => f.write_str("username"),
            UniqueField::Email => f.write_str("email"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Record not found")]
    NotFound,

    #[error("Duplicate {0}")]
    Duplicate(UniqueField),
}

impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DatabaseError::NotFound,
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                match db_err.constraint() {
                    Some("users_username_key") => DatabaseError::Duplicate(UniqueField::Username),
                    Some("users_email_key") => DatabaseError::Duplicate(UniqueField::Email),
                    _ => DatabaseError::QueryError(err.to_string()),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DatabaseError::ConnectionError(err.to_string())
            }
            _ => DatabaseError::QueryError(err.to_string()),
        }
    }
}
