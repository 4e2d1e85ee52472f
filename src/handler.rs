use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    error::Result,
    model::{Deleted, Identity, Todo},
    schema::{CreateTodoSchema, UpdateTodoSchema},
    AppState,
};

// Handler for the identity route
pub async fn identity_handler() -> impl IntoResponse {
    Json(Identity {
        nombre_completo: "Rodrigo Vazquez Reyes".to_string(),
        mensaje: "Endpoint con mi apellido funcionando correctamente. :D".to_string(),
    })
}

// Handler for getting all Todo items, newest first
pub async fn get_todos(State(data): State<Arc<AppState>>) -> Result<Json<Vec<Todo>>> {
    let todos = data.todos.list_todos().await?;
    Ok(Json(todos))
}

// Handler for creating a new Todo
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    payload: Result<Json<CreateTodoSchema>, JsonRejection>,
) -> Result<Json<Todo>> {
    let Json(body) = payload?;
    let todo = data.todos.create_todo(body.task).await?;
    Ok(Json(todo))
}

// Handler for flipping the completion flag of a Todo
pub async fn toggle_todo(
    path: Result<Path<i64>, PathRejection>,
    State(data): State<Arc<AppState>>,
) -> Result<Json<Todo>> {
    let Path(id) = path?;
    let todo = data.todos.toggle_completion(id).await?;
    Ok(Json(todo))
}

// Handler for editing the text of a Todo
pub async fn update_todo(
    path: Result<Path<i64>, PathRejection>,
    State(data): State<Arc<AppState>>,
    payload: Result<Json<UpdateTodoSchema>, JsonRejection>,
) -> Result<Json<Todo>> {
    let Path(id) = path?;
    let Json(body) = payload?;
    let todo = data.todos.edit_task_text(id, body.task).await?;
    Ok(Json(todo))
}

// Handler for deleting a Todo by ID
pub async fn delete_todo(
    path: Result<Path<i64>, PathRejection>,
    State(data): State<Arc<AppState>>,
) -> Result<Json<Deleted>> {
    let Path(id) = path?;
    data.todos.delete_todo(id).await?;
    Ok(Json(Deleted {
        mensaje: "Tarea eliminada exitosamente".to_string(),
    }))
}
