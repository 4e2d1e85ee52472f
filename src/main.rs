use std::sync::Arc;

use anyhow::Context;
use axum::Server;
use tracing_subscriber::EnvFilter;

use todo_api::{connect, create_router, AppState, Config, TodoService};

// Entry point of the application
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("todo_api=info,tower_http=info")),
        )
        .init();

    // Connect to the database
    let pool = match connect(&config.store).await {
        Ok(pool) => {
            tracing::info!("connection to the database is successful");
            pool
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to connect to the database");
            return Err(err).context("database connection");
        }
    };

    let todos = TodoService::new(pool);
    todos
        .ensure_schema()
        .await
        .context("creating todos table")?;

    let app = create_router(Arc::new(AppState { todos }));

    tracing::info!(addr = %config.server_addr, "server started successfully");

    Server::bind(&config.server_addr)
        .serve(app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
