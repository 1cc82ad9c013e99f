//! # dset_generator
//!
//! 把 CSV 中的题目逐条交给推理模型，收集"思考过程 + 最终答案"，
//! 同时写入 CSV、TXT、JSON-lines 三种输出。失败时在输入 CSV 中打上书签，
//! 下次运行从书签处继续。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - `ReasoningClient` 及其 HTTP 实现 `LlmClient`
//!
//! ### ② 业务能力层（Services）
//! - `AnswerService` - 单次答题
//! - `OutputWriter` - 追加写三个输出文件
//! - `BookmarkWriter` - 整表重写输入 CSV
//!
//! ### ③ 流程层（Workflow）
//! - `QuestionFlow` - 单题流程（请求 → 落盘，带指数退避重试）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 加载题目表、定位书签、顺序处理、维护书签

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{LlmClient, ReasoningClient, ReasoningReply};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerRecord, Bookmark, QuestionRecord, QuestionTable};
pub use orchestrator::{App, RunOutcome, RunSummary};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow, RetryPolicy};
