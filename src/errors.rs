use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Inference backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Inference backend error: {0}")]
    BackendError(String),

    #[error("Malformed model reply: {0}")]
    MalformedReply(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::BackendUnreachable(_) => "BACKEND_UNREACHABLE",
            AppError::BackendError(_) => "BACKEND_ERROR",
            AppError::MalformedReply(_) => "MALFORMED_REPLY",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        // Every failure in the pipeline is a server-side problem; the client
        // request itself is never at fault here.
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("request failed [{}]: {}", self.error_code(), self);
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::BackendError(err.to_string())
        } else {
            // Connect failures, timeouts and other transport errors all mean
            // the backend could not be reached in time.
            AppError::BackendUnreachable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
