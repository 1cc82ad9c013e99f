//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 空题干 → 跳过
//! 2. 请求推理模型 → 写入三个输出文件
//! 3. 任一步失败 → 指数退避后重试，重试用尽则返回 `Exhausted`

use anyhow::Result;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::models::QuestionRecord;
use crate::services::{AnswerService, OutputWriter};
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;
use crate::workflow::retry_policy::RetryPolicy;

/// 题目处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已得到答案并落盘
    Success,
    /// 空题干，未处理
    Skipped,
    /// 重试用尽
    Exhausted { attempts: u32 },
}

/// 题目处理流程
///
/// - 编排"请求 → 落盘"以及重试
/// - 不碰书签，书签由编排层决定
pub struct QuestionFlow {
    answer_service: AnswerService,
    output_writer: OutputWriter,
    retry_policy: RetryPolicy,
}

impl QuestionFlow {
    pub fn new(
        answer_service: AnswerService,
        output_writer: OutputWriter,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            answer_service,
            output_writer,
            retry_policy,
        }
    }

    pub fn output_writer(&self) -> &OutputWriter {
        &self.output_writer
    }

    pub async fn run(&self, record: &QuestionRecord, ctx: &QuestionCtx) -> ProcessResult {
        let question = record.question();
        if question.is_empty() {
            return ProcessResult::Skipped;
        }

        let mut retry_count = 0;
        loop {
            info!(
                "[{}] {} 正在处理: {}",
                chrono::Local::now().format("%H:%M:%S"),
                ctx,
                truncate_text(question, 50)
            );

            match self.attempt(question).await {
                Ok(()) => {
                    info!("{} ✓ 处理成功", ctx);
                    return ProcessResult::Success;
                }
                Err(e) => {
                    error!("{} ❌ 处理失败: {:#}", ctx, e);
                }
            }

            if retry_count >= self.retry_policy.max_retries {
                return ProcessResult::Exhausted {
                    attempts: retry_count + 1,
                };
            }

            let wait = self.retry_policy.delay_for(retry_count);
            warn!(
                "{} ⏳ {} 秒后重试 ({}/{})...",
                ctx,
                wait.as_secs(),
                retry_count + 1,
                self.retry_policy.max_retries
            );
            sleep(wait).await;
            retry_count += 1;
        }
    }

    /// 一次完整尝试：请求 + 写入三个输出
    async fn attempt(&self, question: &str) -> Result<()> {
        let answer = self.answer_service.answer(question).await?;
        self.output_writer.write(&answer)?;
        Ok(())
    }
}
