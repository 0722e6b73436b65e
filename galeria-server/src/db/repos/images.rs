//! Image repository
//!
//! Records are insert-only: nothing here updates or deletes a row.

use sqlx::{FromRow, PgPool};

/// Image record from database
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: i32,
    pub url: String,
    pub tag: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Image repository
pub struct ImageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ImageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new record and return it with its generated id.
    ///
    /// Single statement, so the write is atomic; a failed insert leaves
    /// nothing behind.
    pub async fn insert(&self, url: &str, tag: &str) -> Result<Image, DbError> {
        let image = sqlx::query_as::<_, Image>(
            r#"
            INSERT INTO imagens (url, tag)
            VALUES ($1, $2)
            RETURNING id, url, tag
            "#,
        )
        .bind(url)
        .bind(tag)
        .fetch_one(self.pool)
        .await?;

        Ok(image)
    }

    /// Get a single record by id.
    pub async fn get(&self, id: i32) -> Result<Image, DbError> {
        let image = sqlx::query_as::<_, Image>(
            "SELECT id, url, tag FROM imagens WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "imagem",
            id: id.to_string(),
        })?;

        Ok(image)
    }

    /// List every stored record, oldest first.
    pub async fn list(&self) -> Result<Vec<Image>, DbError> {
        let images = sqlx::query_as::<_, Image>(
            "SELECT id, url, tag FROM imagens ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(images)
    }

    /// Distinct tag values currently present.
    pub async fn distinct_tags(&self) -> Result<Vec<String>, DbError> {
        let tags = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT tag FROM imagens ORDER BY tag",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set:
    // DATABASE_URL=postgres://... cargo test -p galeria-server -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("schema creation failed");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_get_roundtrip() {
        let pool = test_pool().await;
        let repo = ImageRepo::new(&pool);

        let inserted = repo
            .insert("https://images.dog.ceo/breeds/akita/512.jpg", "dog")
            .await
            .expect("insert failed");
        let fetched = repo.get(inserted.id).await.expect("get failed");

        assert_eq!(fetched.id, inserted.id);
        assert_eq!(fetched.url, inserted.url);
        assert_eq!(fetched.tag, "dog");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_missing_id_is_not_found() {
        let pool = test_pool().await;

        let err = ImageRepo::new(&pool).get(i32::MAX).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn distinct_tags_collapse_duplicates() {
        let pool = test_pool().await;
        let repo = ImageRepo::new(&pool);

        repo.insert("https://images.dog.ceo/breeds/husky/a.jpg", "dog")
            .await
            .expect("insert failed");
        repo.insert("https://images.dog.ceo/breeds/husky/b.jpg", "dog")
            .await
            .expect("insert failed");

        let tags = repo.distinct_tags().await.expect("tags failed");
        let dogs = tags.iter().filter(|tag| tag.as_str() == "dog").count();
        assert_eq!(dogs, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_contains_inserted_record() {
        let pool = test_pool().await;
        let repo = ImageRepo::new(&pool);

        let inserted = repo
            .insert("https://images.dog.ceo/breeds/pug/c.jpg", "dog")
            .await
            .expect("insert failed");
        let all = repo.list().await.expect("list failed");

        assert!(all.iter().any(|image| image.id == inserted.id));
    }
}
