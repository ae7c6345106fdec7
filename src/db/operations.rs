use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::db::models::User;
use crate::db::UserRepository;
use crate::error::DatabaseError;

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

#[derive(Clone)]
pub struct DbOperations {
    pool: PgPool,
}

impl DbOperations {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Applies the embedded migrations under `migrations/`.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
        info!("Database migrations applied");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn begin_transaction(&self) -> Result<Transaction<'_, Postgres>, DatabaseError> {
        Ok(self.pool.begin().await?)
    }

    pub async fn create_user_with_transaction(
        &self,
        user: &User,
        transaction: &mut Transaction<'_, Postgres>,
    ) -> Result<User, DatabaseError> {
        let query = format!(
            "INSERT INTO users (id, username, email, password_hash, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .fetch_one(&mut **transaction)
            .await?;

        Ok(user)
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DatabaseError> {
        let query = format!("SELECT {} FROM users WHERE {} = $1", USER_COLUMNS, column);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

#[async_trait]
impl UserRepository for DbOperations {
    async fn create_user(&self, user: &User) -> Result<User, DatabaseError> {
        let mut transaction = self.begin_transaction().await?;

        let result = self.create_user_with_transaction(user, &mut transaction).await;

        match result {
            Ok(user) => {
                transaction.commit().await?;
                Ok(user)
            }
            Err(e) => {
                transaction.rollback().await?;
                Err(e)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DatabaseError> {
        let query = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        self.find_one("username", username).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        self.find_one("email", email).await
    }
}
