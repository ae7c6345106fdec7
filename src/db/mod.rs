//! Database module
//!
//! The credential table lives behind [`UserRepository`]. [`DbOperations`]
//! is the PostgreSQL implementation used by the server;
//! [`InMemoryUserRepository`] keeps the same guarantees in a map and backs
//! the handler tests.

pub mod memory;
pub mod models;
pub mod operations;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DatabaseError;

pub use memory::InMemoryUserRepository;
pub use models::User;
pub use operations::DbOperations;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user. Fails with [`DatabaseError::Duplicate`] when the
    /// username or email is already present; nothing is written in that case.
    async fn create_user(&self, user: &User) -> Result<User, DatabaseError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;
}
