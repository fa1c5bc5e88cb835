//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use crate::domain::question::QuestionKind;

/// 应用层错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// 题目集合为空（数据文件缺失或无有效题目）
    #[error("No {kind} questions available")]
    EmptyCollection { kind: QuestionKind },

    /// 该种类不支持打乱（math 只返回占位状态）
    #[error("Question kind cannot be shuffled: {0}")]
    Unsupported(QuestionKind),
}

impl ApplicationError {
    /// 创建空集合错误
    pub fn empty(kind: QuestionKind) -> Self {
        Self::EmptyCollection { kind }
    }
}
