pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod route;
pub mod schema;
pub mod service;

pub use config::{Config, ConfigError, StoreConfig};
pub use error::TodoError;
pub use model::Todo;
pub use route::create_router;
pub use service::{connect, TodoService};

// Struct representing the application state
pub struct AppState {
    pub todos: TodoService,
}
