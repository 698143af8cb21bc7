use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Database Error: {0}")]
    DatabaseError(#[from] DbError),

    #[error("Blocking Error: {0}")]
    BlockingError(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Integrity Error: {0}")]
    IntegrityError(String),

    #[error("{0} not found")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Connection Error: {0}")]
    ConnectionError(String),

    #[error("Query Error: {0}")]
    QueryBuilderError(String),

    #[error("Insertion Error: {0}")]
    InsertionError(String),

    #[error("Deletion Error: {0}")]
    DeletionError(String),

    #[error("Other Database Error: {0}")]
    Other(String),
}

impl ResponseError for CustomError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // Validation and integrity failures mirror the wire shape of the
            // original API: a 400 with the message wrapped in a list
            CustomError::ValidationError(msg) | CustomError::IntegrityError(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": [msg] }))
            }
            CustomError::NotFound(_) => {
                HttpResponse::NotFound().json(json!({ "error": self.to_string() }))
            }
            CustomError::BlockingError(_) => {
                HttpResponse::InternalServerError().body(self.to_string())
            }
            CustomError::DatabaseError(err) => match err {
                DbError::ConnectionError(_)
                | DbError::QueryBuilderError(_)
                | DbError::InsertionError(_)
                | DbError::DeletionError(_)
                | DbError::Other(_) => HttpResponse::InternalServerError().body(self.to_string()),
            },
        }
    }
}
