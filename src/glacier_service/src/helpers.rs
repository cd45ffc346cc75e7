use glacier_adapters::{config::PostgresSettings, persistence::PostgresUserRepository};
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Create a PostgreSQL connection pool from settings
///
/// Connects eagerly so a misconfigured database fails at startup. Pool
/// lifecycle events are logged at debug level.
///
/// # Arguments
/// * `settings` - Connection URL and pool tuning
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .max_lifetime(settings.max_lifetime())
        .idle_timeout(settings.idle_timeout())
        .acquire_timeout(settings.acquire_timeout())
        .test_before_acquire(settings.test_before_acquire)
        .after_connect(|_conn, meta| {
            Box::pin(async move {
                tracing::debug!(age = ?meta.age, "Opened database connection");
                Ok(())
            })
        })
        .before_acquire(|_conn, meta| {
            Box::pin(async move {
                tracing::debug!(idle_for = ?meta.idle_for, "Acquiring database connection");
                Ok(true)
            })
        })
        .after_release(|_conn, meta| {
            Box::pin(async move {
                tracing::debug!(age = ?meta.age, "Released database connection");
                Ok(true)
            })
        })
        .connect_with(settings.connect_options()?)
        .await
}

/// Configure and return a PostgreSQL backed user repository
pub async fn build_postgres_user_repository(
    settings: &PostgresSettings,
) -> Result<PostgresUserRepository, sqlx::Error> {
    let pool = get_postgres_pool(settings).await?;
    Ok(PostgresUserRepository::new(pool, settings.query_timeout()))
}
