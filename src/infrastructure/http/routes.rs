//! HTTP Routes
//!
//! API Endpoints:
//! - /                        GET  存活提示（纯文本）
//! - /api/ping                GET  健康检查
//! - /api/questions/picture   GET  图片题（随机顺序）
//! - /api/questions/word      GET  单词题（随机顺序）
//! - /api/questions/quiz      GET  选择题（随机顺序）
//! - /api/questions/math      GET  数学题就绪状态

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/questions", question_routes())
}

/// Question 路由
fn question_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/picture", get(handlers::get_picture_questions))
        .route("/word", get(handlers::get_word_questions))
        .route("/quiz", get(handlers::get_quiz_questions))
        .route("/math", get(handlers::get_math_questions))
}
