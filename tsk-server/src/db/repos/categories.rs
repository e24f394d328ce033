//! Category repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories, sorted by name.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(self.pool)
            .await?;

        Ok(categories)
    }

    /// Create a category, returning the existing row on name conflict (idempotent).
    pub async fn ensure(&self, name: &str) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name) VALUES (?)
            ON CONFLICT (name) DO UPDATE SET name = excluded.name
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(self.pool)
        .await?;

        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrations};

    async fn setup() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn list_sorted_by_name() {
        let pool = setup().await;
        let repo = CategoryRepo::new(&pool);
        repo.ensure("Work").await.unwrap();
        repo.ensure("Errands").await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Errands", "General", "Work"]);
    }

    #[tokio::test]
    async fn ensure_is_idempotent() {
        let pool = setup().await;
        let repo = CategoryRepo::new(&pool);

        let first = repo.ensure("Work").await.unwrap();
        let second = repo.ensure("Work").await.unwrap();
        assert_eq!(first, second);

        let general = repo.ensure("General").await.unwrap();
        assert_eq!(general.id, 1);
    }
}
