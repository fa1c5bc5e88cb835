//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（QuestionStore）
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

pub use error::ApplicationError;

pub use ports::{QuestionSet, QuestionStorePort};

pub use queries::{
    GetMathStatus,
    GetStoreSummary,
    ShuffleQuestions,
    // Handlers
    handlers::{
        GetMathStatusHandler, GetStoreSummaryHandler, ShuffleQuestionsHandler, ShuffledQuestions,
        StoreSummary,
    },
};
