//! Question HTTP Handlers
//!
//! 每个请求从只读题库复制一份并随机打乱，互不影响。

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{GetMathStatus, ShuffleQuestions, ShuffledQuestions};
use crate::domain::question::{MathStatus, QuestionKind};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

fn shuffle(state: &AppState, kind: QuestionKind) -> Result<Json<ShuffledQuestions>, ApiError> {
    let result = state
        .shuffle_questions_handler
        .handle(ShuffleQuestions::new(kind))?;
    Ok(Json(result))
}

/// 图片题（随机顺序）
pub async fn get_picture_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShuffledQuestions>, ApiError> {
    shuffle(&state, QuestionKind::Picture)
}

/// 单词题（随机顺序）
pub async fn get_word_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShuffledQuestions>, ApiError> {
    shuffle(&state, QuestionKind::Word)
}

/// 选择题（随机顺序）
pub async fn get_quiz_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShuffledQuestions>, ApiError> {
    shuffle(&state, QuestionKind::Quiz)
}

/// 数学题就绪状态，题目由前端按难度生成
pub async fn get_math_questions(State(state): State<Arc<AppState>>) -> Json<MathStatus> {
    Json(state.math_status_handler.handle(GetMathStatus))
}
