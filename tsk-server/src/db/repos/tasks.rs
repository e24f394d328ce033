//! Task repository
//!
//! Handles task CRUD with:
//! - create: order computed and row inserted in one statement
//! - update: field overwrite plus child category cascade (transaction)
//! - complete: hard delete, subtasks removed by ON DELETE CASCADE
//! - reorder: batch order/parent rewrite (transaction)

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{ReorderEntry, TaskFields, TaskFilter};

/// Task record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category_id: i64,
    pub parent_id: Option<i64>,
    #[sqlx(rename = "task_order")]
    pub order: i64,
    pub completed: bool,
}

/// Task repository
pub struct TaskRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TaskRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List open tasks, optionally limited to one category.
    ///
    /// Unfiltered results are sorted by category, then order; filtered
    /// results by order alone.
    pub async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, DbError> {
        let tasks = match filter {
            TaskFilter::Category(category_id) => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT id, title, COALESCE(description, '') AS description,
                           category_id, parent_id, task_order, completed
                    FROM tasks
                    WHERE category_id = ? AND completed = 0
                    ORDER BY task_order, id
                    "#,
                )
                .bind(category_id)
                .fetch_all(self.pool)
                .await?
            }
            TaskFilter::Unmatched => Vec::new(),
            TaskFilter::All => {
                sqlx::query_as::<_, Task>(
                    r#"
                    SELECT id, title, COALESCE(description, '') AS description,
                           category_id, parent_id, task_order, completed
                    FROM tasks
                    WHERE completed = 0
                    ORDER BY category_id, task_order, id
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(tasks)
    }

    /// Create a task at the end of its sibling group.
    ///
    /// The sibling group is `(category_id, parent_id)`, with "no parent" as a
    /// group of its own. The first task in a group gets order 0.
    pub async fn create(&self, fields: &TaskFields) -> Result<Task, DbError> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, category_id, parent_id, task_order)
            SELECT ?, ?, ?, ?, COALESCE(MAX(task_order), -1) + 1
            FROM tasks
            WHERE category_id = ? AND parent_id IS ? AND completed = 0
            RETURNING id, title, COALESCE(description, '') AS description,
                      category_id, parent_id, task_order, completed
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.category_id)
        .bind(fields.parent_id)
        .bind(fields.category_id)
        .bind(fields.parent_id)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = task.id, order = task.order, "created task");
        Ok(task)
    }

    /// Overwrite a task's fields and move its direct children to its category.
    ///
    /// Grandchildren keep their category. An unknown id is not an error.
    pub async fn update(&self, id: i64, fields: &TaskFields) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, category_id = ?, parent_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.category_id)
        .bind(fields.parent_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        let children = sqlx::query("UPDATE tasks SET category_id = ? WHERE parent_id = ?")
            .bind(fields.category_id)
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(id, children, "updated task");
        Ok(())
    }

    /// Delete a task. Its subtasks go with it through the foreign key cascade.
    pub async fn complete(&self, id: i64) -> Result<(), DbError> {
        let deleted = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?
            .rows_affected();

        tracing::debug!(id, deleted, "completed task");
        Ok(())
    }

    /// Rewrite order and parent for a batch of tasks.
    ///
    /// Each entry's position becomes its order. No check is made that the
    /// resulting orders are contiguous per group or that the parent chain is
    /// acyclic.
    pub async fn reorder(&self, entries: &[ReorderEntry]) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        for (position, entry) in entries.iter().enumerate() {
            sqlx::query("UPDATE tasks SET task_order = ?, parent_id = ? WHERE id = ?")
                .bind(position as i64)
                .bind(entry.parent_id)
                .bind(entry.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(count = entries.len(), "reordered tasks");
        Ok(())
    }
}
