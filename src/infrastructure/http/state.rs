//! Application State
//!
//! 包含题库端口和所有 Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    GetMathStatusHandler, GetStoreSummaryHandler, QuestionStorePort, ShuffleQuestionsHandler,
};

/// 应用状态
///
/// 题库在启动时构建一次，之后所有请求只读共享。
pub struct AppState {
    pub shuffle_questions_handler: ShuffleQuestionsHandler,
    pub math_status_handler: GetMathStatusHandler,
    pub store_summary_handler: GetStoreSummaryHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn QuestionStorePort>) -> Self {
        Self {
            shuffle_questions_handler: ShuffleQuestionsHandler::new(store.clone()),
            math_status_handler: GetMathStatusHandler::new(store.clone()),
            store_summary_handler: GetStoreSummaryHandler::new(store),
        }
    }
}
