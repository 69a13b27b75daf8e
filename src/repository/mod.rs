use std::sync::Arc;

use diesel::r2d2::PoolError;
use thiserror::Error;

use crate::config::Config;
use crate::models::todo::{NewTodo, TodoChanges, TodoItem};

pub mod database;
pub mod memory;
pub mod schema;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("unsupported database url scheme in `{0}`")]
    UnsupportedUrl(String),
    #[error("in-memory store lock poisoned")]
    Poisoned,
}

/// Storage for todo items.
///
/// Implementations block; callers on the async runtime run them through
/// `web::block`. `update` and `delete` return the number of affected rows,
/// zero meaning no row had that id.
pub trait TodoRepository: Send + Sync {
    /// Creates the backing table if it does not exist yet.
    fn bootstrap(&self) -> Result<(), RepositoryError>;
    fn list(&self) -> Result<Vec<TodoItem>, RepositoryError>;
    fn create(&self, new_todo: NewTodo) -> Result<i32, RepositoryError>;
    fn update(&self, todo_id: i32, changes: TodoChanges) -> Result<usize, RepositoryError>;
    fn delete(&self, todo_id: i32) -> Result<usize, RepositoryError>;
}

/// Builds the repository named by `config.database_url` and bootstraps its schema.
pub fn connect(config: &Config) -> Result<Arc<dyn TodoRepository>, RepositoryError> {
    let url = config.database_url.as_str();
    let repository: Arc<dyn TodoRepository> =
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Arc::new(database::Database::new(
                url,
                config.pool_size,
                config.connect_timeout,
            )?)
        } else if url.starts_with("memory://") {
            Arc::new(memory::MemoryStore::new())
        } else {
            return Err(RepositoryError::UnsupportedUrl(redact(url)));
        };
    repository.bootstrap()?;
    Ok(repository)
}

// Keeps credentials out of error messages and logs.
fn redact(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, _)) => format!("{}://...", scheme),
        None => "<no scheme>".to_string(),
    }
}
