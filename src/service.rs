use sqlx::{
    migrate::MigrateDatabase, query, query_as, sqlite::SqlitePoolOptions, Sqlite, SqlitePool,
};

use crate::{
    config::StoreConfig,
    error::{Result, TodoError},
    model::Todo,
};

const CREATE_TABLE: &str = r#"CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    is_completed BOOLEAN NOT NULL DEFAULT FALSE
);"#;

// Open the pool, creating the database file first if it does not exist yet
pub async fn connect(config: &StoreConfig) -> Result<SqlitePool, sqlx::Error> {
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!(url = %config.database_url, "creating database");
        Sqlite::create_database(&config.database_url).await?;
    }

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await
}

// Data access for the `todos` table. Each operation holds a pooled connection
// only for its own duration; an uncommitted transaction rolls back on drop.
#[derive(Debug, Clone)]
pub struct TodoService {
    pool: SqlitePool,
}

impl TodoService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        query(CREATE_TABLE).execute(&mut *conn).await?;
        Ok(())
    }

    pub async fn create_todo(&self, task: String) -> Result<Todo> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;
        let todo = query_as::<_, Todo>(
            "INSERT INTO todos (task, is_completed) VALUES (?, FALSE) RETURNING id, task, is_completed",
        )
        .bind(task)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(todo)
    }

    // Newest first
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        let todos =
            query_as::<_, Todo>("SELECT id, task, is_completed FROM todos ORDER BY id DESC")
                .fetch_all(&mut *conn)
                .await?;
        Ok(todos)
    }

    // Single-statement flip; concurrent toggles of one row never lose a write
    pub async fn toggle_completion(&self, id: i64) -> Result<Todo> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;
        let todo = query_as::<_, Todo>(
            "UPDATE todos SET is_completed = NOT is_completed WHERE id = ? RETURNING id, task, is_completed",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(TodoError::NotFound(id))?;
        tx.commit().await?;

        Ok(todo)
    }

    pub async fn edit_task_text(&self, id: i64, task: String) -> Result<Todo> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;
        let todo = query_as::<_, Todo>(
            "UPDATE todos SET task = ? WHERE id = ? RETURNING id, task, is_completed",
        )
        .bind(task)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(TodoError::NotFound(id))?;
        tx.commit().await?;

        Ok(todo)
    }

    pub async fn delete_todo(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(unavailable)?;
        let rows_affected = query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if rows_affected == 0 {
            return Err(TodoError::NotFound(id));
        }
        tx.commit().await?;

        Ok(())
    }
}

fn unavailable(err: sqlx::Error) -> TodoError {
    tracing::error!(error = %err, "could not obtain a database connection");
    TodoError::StoreUnavailable(err)
}
