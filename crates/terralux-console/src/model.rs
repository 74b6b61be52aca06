//! Console response envelope

use actix_web::{HttpResponse, http::StatusCode};
use serde::{Deserialize, Serialize};

/// API result wrapper used by console endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub code: i32,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data,
        }
    }

    pub fn http_success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(Self::success(data))
    }
}

impl ApiResult<String> {
    pub fn http_not_found<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND).json(Self {
            code: 404,
            message: "not found".to_string(),
            data: err.to_string(),
        })
    }

    pub fn http_internal_error<E: std::fmt::Display>(err: E) -> HttpResponse {
        HttpResponse::InternalServerError().json(Self {
            code: 500,
            message: "error".to_string(),
            data: err.to_string(),
        })
    }
}
