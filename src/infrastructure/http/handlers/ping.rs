//! Ping Handler
//!
//! 健康检查与根路径存活提示

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::application::{GetStoreSummary, StoreSummary};
use crate::infrastructure::http::state::AppState;

/// 根路径存活提示
pub const HOME_MESSAGE: &str =
    "Backend is running! Access API endpoints like /api/questions/picture";

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub questions: StoreSummary,
}

/// 根路径
pub async fn home() -> &'static str {
    HOME_MESSAGE
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        questions: state.store_summary_handler.handle(GetStoreSummary),
    })
}
