//! Question Store Port - 出站端口
//!
//! 进程级只读题库的抽象接口。
//! 具体实现在 infrastructure 层（内置字面量 / JSON 文件）。

use crate::domain::question::{
    MathStatus, PictureQuestion, QuestionKind, QuizQuestion, WordQuestion,
};

/// 某一种类的完整题目集合（借用自题库）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSet<'a> {
    Picture(&'a [PictureQuestion]),
    Word(&'a [WordQuestion]),
    Quiz(&'a [QuizQuestion]),
    Math(&'a MathStatus),
}

impl QuestionSet<'_> {
    /// 题目数量（math 占位计为 1）
    pub fn len(&self) -> usize {
        match self {
            QuestionSet::Picture(items) => items.len(),
            QuestionSet::Word(items) => items.len(),
            QuestionSet::Quiz(items) => items.len(),
            QuestionSet::Math(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 题库端口
///
/// 不变量: 启动时构建一次，此后只读，不随请求变化。
pub trait QuestionStorePort: Send + Sync {
    fn pictures(&self) -> &[PictureQuestion];

    fn words(&self) -> &[WordQuestion];

    fn quizzes(&self) -> &[QuizQuestion];

    fn math(&self) -> &MathStatus;

    /// 按种类获取完整集合
    fn get(&self, kind: QuestionKind) -> QuestionSet<'_> {
        match kind {
            QuestionKind::Picture => QuestionSet::Picture(self.pictures()),
            QuestionKind::Word => QuestionSet::Word(self.words()),
            QuestionKind::Quiz => QuestionSet::Quiz(self.quizzes()),
            QuestionKind::Math => QuestionSet::Math(self.math()),
        }
    }

    fn len(&self, kind: QuestionKind) -> usize {
        self.get(kind).len()
    }
}
