use chrono::prelude::{DateTime, Utc};
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::repository::schema::todo)]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body accepted by create and update.
///
/// A missing or `null` field decodes as its zero value; an empty `title` is
/// rejected by the handler, not by the decoder.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TodoPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::repository::schema::todo)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = crate::repository::schema::todo)]
pub struct TodoChanges {
    pub title: String,
    pub completed: bool,
}

impl From<TodoPayload> for NewTodo {
    fn from(value: TodoPayload) -> Self {
        Self {
            title: value.title,
            completed: value.completed,
            created_at: Utc::now(),
        }
    }
}

impl From<TodoPayload> for TodoChanges {
    fn from(value: TodoPayload) -> Self {
        Self {
            title: value.title,
            completed: value.completed,
        }
    }
}
