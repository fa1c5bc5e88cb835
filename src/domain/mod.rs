//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Question Context: 题目集合（图片题、单词题、选择题、数学占位）

pub mod question;

// 共享的随机打乱工具
mod shuffle;

pub use shuffle::{shuffled, shuffled_with};
