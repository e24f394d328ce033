//! Schema creation and best-effort upgrades, run at startup

use sqlx::SqlitePool;

use super::DbError;

/// Run all migrations. Safe to call on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            category_id INTEGER NOT NULL,
            parent_id INTEGER REFERENCES tasks(id) ON DELETE CASCADE,
            task_order INTEGER NOT NULL DEFAULT 0,
            completed BOOLEAN NOT NULL DEFAULT 0,
            FOREIGN KEY (category_id) REFERENCES categories(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Databases from the flat-list era have no parent_id column
    if !has_column(pool, "tasks", "parent_id").await? {
        tracing::info!("Adding tasks.parent_id column");
        sqlx::query(
            "ALTER TABLE tasks ADD COLUMN parent_id INTEGER REFERENCES tasks(id) ON DELETE CASCADE",
        )
        .execute(pool)
        .await?;
    }

    sqlx::raw_sql(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_order ON tasks(category_id, task_order);
        CREATE INDEX IF NOT EXISTS idx_tasks_parent ON tasks(parent_id);
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("INSERT OR IGNORE INTO categories (id, name) VALUES (1, 'General')")
        .execute(pool)
        .await?;

    tracing::debug!("Migrations complete");
    Ok(())
}

async fn has_column(pool: &SqlitePool, table: &str, column: &str) -> Result<bool, DbError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?")
            .bind(table)
            .bind(column)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}
