use actix_web::http::header::ContentType;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};

use crate::api::error::ApiError;
use crate::models::response::Response;
use crate::pages::Pages;

mod api;
mod config;
mod models;
mod pages;
mod repository;
mod telemetry;

#[get("/health")]
async fn healthcheck() -> impl Responder {
    HttpResponse::Ok().json(Response::new("Everything is working fine"))
}

#[get("/")]
async fn index(pages: web::Data<Pages>) -> Result<HttpResponse, ApiError> {
    let html = pages.home().map_err(|err| {
        tracing::error!(error = %err, "failed to render home page");
        ApiError::Internal
    })?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(Response::new("Resource not found")))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::new()?;
    telemetry::init(&config.app_name)?;

    let todo_db = repository::connect(&config)?;
    let app_data = web::Data::from(todo_db);
    let pages = web::Data::new(Pages::new(&config.app_name)?);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .app_data(pages.clone())
            .configure(api::api::config)
            .service(index)
            .service(healthcheck)
            .default_service(web::route().to(not_found))
            .wrap(Logger::default())
    })
    .client_request_timeout(config.request_timeout)
    .client_disconnect_timeout(config.request_timeout)
    .keep_alive(config.keep_alive)
    .shutdown_timeout(config.shutdown_timeout.as_secs())
    .bind((config.host.as_str(), config.port))?;

    tracing::info!(host = %config.host, port = config.port, "listening");
    server.run().await?;
    tracing::info!("server gracefully stopped");
    Ok(())
}
