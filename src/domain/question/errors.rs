//! Question Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("字段不能为空: {0}")]
    EmptyField(&'static str),

    #[error("选项数量错误: 期望 {expected}, 实际 {actual}")]
    WrongOptionCount { expected: usize, actual: usize },

    #[error("正确答案索引越界: {index} (选项数 {len})")]
    AnswerIndexOutOfRange { index: usize, len: usize },
}
