use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::models::User;
use crate::db::UserRepository;
use crate::error::{DatabaseError, UniqueField};

/// Map-backed user table with the same uniqueness rules as `users`.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: &User) -> Result<User, DatabaseError> {
        // Check and insert under one write lock, like a unique index would.
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(DatabaseError::Duplicate(UniqueField::Username));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(DatabaseError::Duplicate(UniqueField::Email));
        }

        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        Ok(self.users.read().await.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        Ok(self.users.read().await.values().find(|u| u.email == email).cloned())
    }
}
