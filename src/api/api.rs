use actix_web::{delete, put, routes, web, HttpResponse};

use crate::api::error::ApiError;
use crate::models::response::{Response, TodoCreated, TodoList};
use crate::models::todo::TodoPayload;
use crate::repository::TodoRepository;

#[routes]
#[get("")]
#[get("/")]
pub async fn fetch_todos(db: web::Data<dyn TodoRepository>) -> Result<HttpResponse, ApiError> {
    let repository = db.into_inner();
    let data = web::block(move || repository.list()).await??;
    Ok(HttpResponse::Ok().json(TodoList { data }))
}

#[routes]
#[post("")]
#[post("/")]
pub async fn create_todo(
    db: web::Data<dyn TodoRepository>,
    new_todo: web::Json<TodoPayload>,
) -> Result<HttpResponse, ApiError> {
    let new_todo = new_todo.into_inner();
    if new_todo.title.is_empty() {
        return Err(ApiError::Validation("The title is required"));
    }

    let repository = db.into_inner();
    let todo_id = web::block(move || repository.create(new_todo.into())).await??;
    tracing::info!(todo_id, "todo created");

    Ok(HttpResponse::Created().json(TodoCreated {
        message: "Todo created successfully".to_string(),
        todo_id,
    }))
}

#[put("/{id}")]
pub async fn update_todo_by_id(
    db: web::Data<dyn TodoRepository>,
    id: web::Path<String>,
    updated_todo: web::Json<TodoPayload>,
) -> Result<HttpResponse, ApiError> {
    let updated_todo = updated_todo.into_inner();
    if updated_todo.title.is_empty() {
        return Err(ApiError::Validation("The title field is required"));
    }
    let todo_id = parse_id(&id)?;

    let repository = db.into_inner();
    let rows_affected =
        web::block(move || repository.update(todo_id, updated_todo.into())).await??;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(HttpResponse::Ok().json(Response::new("Todo updated successfully")))
}

#[delete("/{id}")]
pub async fn delete_todo_by_id(
    db: web::Data<dyn TodoRepository>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let todo_id = parse_id(&id)?;

    let repository = db.into_inner();
    let rows_affected = web::block(move || repository.delete(todo_id)).await??;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }
    tracing::info!(todo_id, "todo deleted");

    Ok(HttpResponse::Ok().json(Response::new("Todo deleted successfully")))
}

// An id that is not a number cannot match any row.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::NotFound)
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| ApiError::Decode(err.to_string()).into())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todo")
            .app_data(json_config())
            .service(fetch_todos)
            .service(create_todo)
            .service(update_todo_by_id)
            .service(delete_todo_by_id),
    );
}
