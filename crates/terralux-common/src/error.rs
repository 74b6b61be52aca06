//! Error types for TerraLux
//!
//! This module defines:
//! - `TerraluxError`: Application-specific error enum
//! - `AppError`: Wrapper for integration with actix-web

use std::fmt::{Display, Formatter};

use actix_web::HttpResponse;
use serde::Serialize;

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum TerraluxError {
    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("vendor with id {0} not found")]
    VendorNotFound(i64),

    #[error("model with id {0} not found")]
    ModelNotFound(i64),

    #[error("model with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

/// JSON body used for structured rejections
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Wrapper for application errors to implement actix-web error handling
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<TerraluxError> for AppError {
    fn from(value: TerraluxError) -> Self {
        AppError {
            inner: anyhow::Error::new(value),
        }
    }
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }

    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl actix_web::error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorBody {
            error: self.inner.to_string(),
        };

        if let Some(e) = self.inner.downcast_ref::<TerraluxError>() {
            match e {
                TerraluxError::IllegalArgument(_) | TerraluxError::ConfigError(_) => {
                    HttpResponse::BadRequest().json(body)
                }
                TerraluxError::VendorNotFound(_) | TerraluxError::ModelNotFound(_) => {
                    HttpResponse::NotFound().json(body)
                }
                TerraluxError::DuplicateSlug(_) => HttpResponse::Conflict().json(body),
                TerraluxError::DatabaseError(_) | TerraluxError::InternalError(_) => {
                    HttpResponse::InternalServerError().json(body)
                }
            }
        } else {
            HttpResponse::InternalServerError().json(body)
        }
    }
}
