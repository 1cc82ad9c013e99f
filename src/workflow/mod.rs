pub mod question_ctx;
pub mod question_flow;
pub mod retry_policy;

pub use question_ctx::QuestionCtx;
pub use question_flow::{ProcessResult, QuestionFlow};
pub use retry_policy::RetryPolicy;
