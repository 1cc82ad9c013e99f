//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理整张题目表，维护书签)
//!     ↓
//! workflow::QuestionFlow (处理单个题目 + 重试)
//!     ↓
//! services (能力层：answer / output / bookmark)
//!     ↓
//! clients (基础设施：ReasoningClient)
//! ```

pub mod batch_processor;

pub use batch_processor::{App, RunOutcome, RunSummary};
