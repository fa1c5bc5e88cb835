//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：题库只读，全部操作都是查询

mod question_queries;

pub mod handlers;

pub use question_queries::*;
