//! Persistence Layer - 题库存储
//!
//! 内置字面量和 JSON 文件两种 QuestionStorePort 实现

pub mod builtin;
pub mod json_files;

pub use builtin::BuiltinQuestionStore;
pub use json_files::JsonFileQuestionStore;
