use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::response::Response;
use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to decode request body")]
    Decode(String),
    #[error("{0}")]
    Validation(&'static str),
    #[error("Todo not found")]
    NotFound,
    #[error("Internal server error")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::Validation(_) | ApiError::NotFound => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = Response::new(self.to_string());
        if let ApiError::Decode(detail) = self {
            response.error = Some(detail.clone());
        }
        HttpResponse::build(self.status_code()).json(response)
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        tracing::error!(error = %err, "repository call failed");
        ApiError::Internal
    }
}

impl From<BlockingError> for ApiError {
    fn from(err: BlockingError) -> Self {
        tracing::error!(error = %err, "blocking task was cancelled");
        ApiError::Internal
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn decode_errors_carry_the_decoder_detail() {
        let err = ApiError::Decode("expected value at line 1 column 1".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let response: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.message, "Failed to decode request body");
        assert_eq!(
            response.error.as_deref(),
            Some("expected value at line 1 column 1")
        );
    }

    #[actix_web::test]
    async fn repository_failures_become_opaque_500s() {
        let err: ApiError = RepositoryError::Poisoned.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let response: Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.message, "Internal server error");
        assert!(response.error.is_none());
    }
}
