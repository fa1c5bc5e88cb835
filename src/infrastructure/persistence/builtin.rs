//! Built-in Question Store
//!
//! 实现 QuestionStorePort trait，数据来自内置题库字面量

use crate::application::ports::QuestionStorePort;
use crate::domain::question::{
    catalog, MathStatus, PictureQuestion, QuizQuestion, WordQuestion,
};

/// 内置题库
#[derive(Debug, Clone)]
pub struct BuiltinQuestionStore {
    pictures: Vec<PictureQuestion>,
    words: Vec<WordQuestion>,
    quizzes: Vec<QuizQuestion>,
    math: MathStatus,
}

impl BuiltinQuestionStore {
    pub fn new() -> Self {
        Self {
            pictures: catalog::picture_questions(),
            words: catalog::word_questions(),
            quizzes: catalog::quiz_questions(),
            math: MathStatus::ready(),
        }
    }
}

impl Default for BuiltinQuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStorePort for BuiltinQuestionStore {
    fn pictures(&self) -> &[PictureQuestion] {
        &self.pictures
    }

    fn words(&self) -> &[WordQuestion] {
        &self.words
    }

    fn quizzes(&self) -> &[QuizQuestion] {
        &self.quizzes
    }

    fn math(&self) -> &MathStatus {
        &self.math
    }
}
