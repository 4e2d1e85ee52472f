use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/vazquez", get(identity_handler))
        .route("/todos", get(get_todos).post(create_todo))
        .route(
            "/todos/:id",
            put(toggle_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
