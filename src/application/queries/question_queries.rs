//! Question Queries

use crate::domain::question::QuestionKind;

/// 获取某一种类的全部题目（随机顺序）
#[derive(Debug, Clone, Copy)]
pub struct ShuffleQuestions {
    pub kind: QuestionKind,
}

impl ShuffleQuestions {
    pub fn new(kind: QuestionKind) -> Self {
        Self { kind }
    }
}

/// 获取数学题就绪状态
#[derive(Debug, Clone, Copy)]
pub struct GetMathStatus;

/// 获取题库概况（各种类题目数）
#[derive(Debug, Clone, Copy)]
pub struct GetStoreSummary;
