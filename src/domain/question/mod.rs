//! Question Context - 题目限界上下文
//!
//! 职责:
//! - 题目实体与不变量校验
//! - 内置题库
//! - 题目种类与数学占位状态

pub mod catalog;
mod entities;
mod errors;
mod value_objects;

pub use entities::{PictureQuestion, QuizQuestion, WordQuestion, QUIZ_OPTION_COUNT};
pub use errors::QuestionError;
pub use value_objects::{MathStatus, QuestionKind};
