use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};

use crate::models::todo::{NewTodo, TodoChanges, TodoItem};
use crate::repository::schema::todo;
use crate::repository::{RepositoryError, TodoRepository};

type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;
type DBConnection = PooledConnection<ConnectionManager<PgConnection>>;

const CREATE_TODO_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todo (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Postgres-backed repository using a pooled diesel connection per call.
#[derive(Clone)]
pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new(
        database_url: &str,
        pool_size: u32,
        connect_timeout: Duration,
    ) -> Result<Self, RepositoryError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool: DBPool = r2d2::Pool::builder()
            .max_size(pool_size)
            .connection_timeout(connect_timeout)
            .build(manager)?;
        Ok(Database { pool })
    }

    fn connection(&self) -> Result<DBConnection, RepositoryError> {
        Ok(self.pool.get()?)
    }
}

impl TodoRepository for Database {
    fn bootstrap(&self) -> Result<(), RepositoryError> {
        diesel::sql_query(CREATE_TODO_TABLE).execute(&mut self.connection()?)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        let todos = todo::table
            .select(TodoItem::as_select())
            .load(&mut self.connection()?)?;
        Ok(todos)
    }

    fn create(&self, new_todo: NewTodo) -> Result<i32, RepositoryError> {
        let id = diesel::insert_into(todo::table)
            .values(&new_todo)
            .returning(todo::id)
            .get_result::<i32>(&mut self.connection()?)?;
        Ok(id)
    }

    fn update(&self, todo_id: i32, changes: TodoChanges) -> Result<usize, RepositoryError> {
        let count = diesel::update(todo::table.find(todo_id))
            .set(&changes)
            .execute(&mut self.connection()?)?;
        Ok(count)
    }

    fn delete(&self, todo_id: i32) -> Result<usize, RepositoryError> {
        let count = diesel::delete(todo::table.find(todo_id)).execute(&mut self.connection()?)?;
        Ok(count)
    }
}
