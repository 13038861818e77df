//! Postgres user repository.

use crate::pool::DatabasePool;
use crate::traits::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use vitrine_core::{User, UserId, VitrineResult};

/// Database row for the `users` table.
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    full_name: String,
    email: String,
    password_hash: String,
    avatar_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            full_name: row.full_name,
            email: row.email,
            password_hash: row.password_hash,
            avatar_url: row.avatar_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Postgres-backed [`UserRepository`].
#[derive(Clone)]
pub struct PostgresUserRepository {
    db: DatabasePool,
}

impl PostgresUserRepository {
    #[must_use]
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: UserId) -> VitrineResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, full_name, email, password_hash, avatar_url, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(self.db.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> VitrineResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, full_name, email, password_hash, avatar_url, created_at, updated_at
             FROM users WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(self.db.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> VitrineResult<bool> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))")
                .bind(email)
                .fetch_one(self.db.inner())
                .await?;

        Ok(exists.0)
    }

    async fn save(&self, user: &User) -> VitrineResult<()> {
        sqlx::query(
            "INSERT INTO users (id, full_name, email, password_hash, avatar_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(user.id.into_inner())
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.avatar_url)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(self.db.inner())
        .await?;

        Ok(())
    }
}
