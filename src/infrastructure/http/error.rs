//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::question::QuestionKind;

/// 错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 集合为空：404 + 空数组，客户端仍可按列表解析
    EmptyCollection(QuestionKind),
    BadRequest(String),
}

/// 4xx 状态码的日志由 error_logging_middleware 统一记录，这里不再重复
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::EmptyCollection(_) => (
                StatusCode::NOT_FOUND,
                Json(Vec::<serde_json::Value>::new()),
            )
                .into_response(),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::EmptyCollection { kind } => ApiError::EmptyCollection(kind),
            ApplicationError::Unsupported(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}
