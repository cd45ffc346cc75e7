use std::time::Duration;

use glacier_core::{User, UserId, UserRepository, UserRepositoryError};
use sqlx::PgPool;

/// PostgreSQL backed user repository.
///
/// Expects a `users(id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL, email TEXT NOT NULL)`
/// table. Every statement is bounded by `query_timeout`; connection pooling and
/// acquire timeouts are the pool's concern.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        PostgresUserRepository {
            pool,
            query_timeout,
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save(&self, user: &User) -> Result<UserId, UserRepositoryError> {
        if let Some(id) = user.id() {
            return Err(UserRepositoryError::AlreadyPersisted(id));
        }

        let query = sqlx::query_scalar::<_, i64>(
            r#"
                INSERT INTO users (name, email)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(user.name())
        .bind(user.email().as_ref());

        let id = tokio::time::timeout(self.query_timeout, query.fetch_one(&self.pool))
            .await
            .map_err(|_| UserRepositoryError::Timeout(self.query_timeout))?
            .map_err(|e| UserRepositoryError::UnexpectedError(e.to_string()))?;

        Ok(UserId::new(id))
    }

    // Lookup is not supported by this adapter yet.
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_id(&self, _id: UserId) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::NotImplemented("find_by_id"))
    }
}
