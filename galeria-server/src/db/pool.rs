//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; the service is a thin CRUD layer.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Upper bound on waiting for a pooled connection.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool, connecting eagerly.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    options().connect(database_url).await
}

/// Create a pool without establishing a connection.
///
/// Connections are opened on first use, so the server can boot while the
/// database is unreachable and individual requests fail instead.
pub fn create_lazy_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    options().connect_lazy(database_url)
}

fn options() -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p galeria-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        // Verify we can execute a query
        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn lazy_pool_builds_without_database() {
        // No PostgreSQL is listening here; building the pool must still succeed.
        let pool = create_lazy_pool("postgres://galeria@127.0.0.1:9/galeria");
        assert!(pool.is_ok());
    }
}
