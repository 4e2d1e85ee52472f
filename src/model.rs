// Row of the `todos` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow, serde::Serialize, serde::Deserialize)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub is_completed: bool,
}

// Acknowledgement returned after a delete
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Deleted {
    pub mensaje: String,
}

// Payload of the identity endpoint
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    pub nombre_completo: String,
    pub mensaje: String,
}
