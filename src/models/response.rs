use serde::{Deserialize, Serialize};

use crate::models::todo::TodoItem;

#[derive(Serialize, Deserialize, Debug)]
pub struct Response {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TodoList {
    pub data: Vec<TodoItem>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TodoCreated {
    pub message: String,
    pub todo_id: i32,
}
