use std::sync::{Mutex, MutexGuard};

use crate::models::todo::{NewTodo, TodoChanges, TodoItem};
use crate::repository::{RepositoryError, TodoRepository};

#[derive(Default)]
struct State {
    last_id: i32,
    todos: Vec<TodoItem>,
}

/// Process-local store selected with a `memory://` database url.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, State>, RepositoryError> {
        self.state.lock().map_err(|_| RepositoryError::Poisoned)
    }
}

impl TodoRepository for MemoryStore {
    fn bootstrap(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    fn list(&self) -> Result<Vec<TodoItem>, RepositoryError> {
        Ok(self.state()?.todos.clone())
    }

    fn create(&self, new_todo: NewTodo) -> Result<i32, RepositoryError> {
        let mut state = self.state()?;
        state.last_id += 1;
        let id = state.last_id;
        state.todos.push(TodoItem {
            id,
            title: new_todo.title,
            completed: new_todo.completed,
            created_at: new_todo.created_at,
        });
        Ok(id)
    }

    fn update(&self, todo_id: i32, changes: TodoChanges) -> Result<usize, RepositoryError> {
        let mut state = self.state()?;
        match state.todos.iter_mut().find(|todo| todo.id == todo_id) {
            Some(existing) => {
                existing.title = changes.title;
                existing.completed = changes.completed;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&self, todo_id: i32) -> Result<usize, RepositoryError> {
        let mut state = self.state()?;
        let before = state.todos.len();
        state.todos.retain(|todo| todo.id != todo_id);
        Ok(before - state.todos.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn ids_are_unique_and_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.create(new_todo("first")).unwrap();
        let second = store.create(new_todo("second")).unwrap();
        assert_ne!(first, second);

        assert_eq!(store.delete(second).unwrap(), 1);
        let third = store.create(new_todo("third")).unwrap();
        assert!(third > second);
    }

    #[test]
    fn update_keeps_created_at() {
        let store = MemoryStore::new();
        let id = store.create(new_todo("write report")).unwrap();
        let created_at = store.list().unwrap()[0].created_at;

        let changes = TodoChanges {
            title: "write report".to_string(),
            completed: true,
        };
        assert_eq!(store.update(id, changes).unwrap(), 1);

        let todos = store.list().unwrap();
        assert!(todos[0].completed);
        assert_eq!(todos[0].created_at, created_at);
    }

    #[test]
    fn missing_ids_affect_no_rows() {
        let store = MemoryStore::new();
        store.create(new_todo("keep me")).unwrap();
        let changes = TodoChanges {
            title: "x".to_string(),
            completed: true,
        };
        assert_eq!(store.update(999_999, changes).unwrap(), 0);
        assert_eq!(store.delete(999_999).unwrap(), 0);
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.list().unwrap()[0].title, "keep me");
    }
}
