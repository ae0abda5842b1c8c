use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error("Validation error: {0}")]
    Validation(String),
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, detail) = match self {
            AppError::ActivityNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::AlreadyRegistered => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::NotRegistered => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Validation(ref e) => (StatusCode::BAD_REQUEST, e.clone()),
        };

        HttpResponse::build(status).json(ErrorResponse { detail })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ActivityNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyRegistered => StatusCode::BAD_REQUEST,
            AppError::NotRegistered => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
