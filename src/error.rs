use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TodoError {
    // No connection could be obtained from the pool
    #[error("No se pudo conectar a la base de datos")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Tarea no encontrada")]
    NotFound(i64),

    // Any other failure reported by the store
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    // Request body or path that axum could not extract
    #[error("{1}")]
    Malformed(StatusCode, String),
}

impl TodoError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Malformed(status, _) => *status,
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.status(), rejection.body_text())
    }
}

// Ids that are not integers answer 422, same as a bad body
impl From<PathRejection> for TodoError {
    fn from(rejection: PathRejection) -> Self {
        Self::Malformed(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (self.status(), Json(json!({ "detail": detail }))).into_response()
    }
}
