//! QuizHub - 儿童题库服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Question Context: 图片题、单词题、选择题、数学占位
//! - Shuffle: 均匀随机全排列
//!
//! 应用层 (application/):
//! - Ports: QuestionStorePort
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: 内置题库 + JSON 文件题库

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
