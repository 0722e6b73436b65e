//! Schema creation for the imagens table
//!
//! Create-if-absent only; there is no migration history to track for a
//! single flat table.

use sqlx::PgPool;

/// Ensure the `imagens` table exists.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring imagens table exists...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS imagens (
            id SERIAL PRIMARY KEY,
            url TEXT NOT NULL,
            tag TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
