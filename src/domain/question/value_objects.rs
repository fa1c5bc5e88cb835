//! Question Context - Value Objects

use serde::Serialize;

/// 题目种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    Picture,
    Word,
    Quiz,
    Math,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Picture => "picture",
            QuestionKind::Word => "word",
            QuestionKind::Quiz => "quiz",
            QuestionKind::Math => "math",
        }
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 数学题占位状态
///
/// 数学题由前端按难度现场生成，后端只告知已就绪。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathStatus {
    pub status: &'static str,
    pub message: &'static str,
}

impl MathStatus {
    pub const fn ready() -> Self {
        Self {
            status: "ready",
            message: "Math questions are generated on frontend based on level.",
        }
    }
}

impl Default for MathStatus {
    fn default() -> Self {
        Self::ready()
    }
}
