//! 批量题目处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、创建 LLM 客户端
//! 2. **加载题目表**：读取 CSV，定位书签（续跑起点）
//! 3. **顺序处理**：从起点开始逐题委托给 `QuestionFlow`
//! 4. **书签维护**：成功时清除书签，重试用尽时打上书签并结束本次运行
//! 5. **全局统计**：汇总本次运行结果
//!
//! 整个过程单线程顺序执行，不并发请求。

use crate::clients::{LlmClient, ReasoningClient};
use crate::config::Config;
use crate::error::{AppError, ConfigError};
use crate::models::load_question_table;
use crate::services::{AnswerService, BookmarkWriter, OutputWriter};
use crate::utils::logging::{log_bookmarked, log_questions_loaded, log_startup, print_final_stats};
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow, RetryPolicy};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 本次运行的结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunOutcome {
    /// 所有剩余题目都已处理
    #[default]
    Completed,
    /// 某题重试用尽，已写入书签
    Bookmarked { row_index: usize },
}

/// 运行统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 续跑起点
    pub start_index: usize,
    /// 本次待处理行数
    pub total: usize,
    pub success: usize,
    pub skipped: usize,
    pub outcome: RunOutcome,
}

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuestionFlow,
    bookmark_writer: BookmarkWriter,
}

impl App {
    /// 初始化应用（使用真实的 LLM 客户端）
    pub fn initialize(config: Config) -> Result<Self> {
        if config.llm_api_key.trim().is_empty() {
            return Err(AppError::from(ConfigError::EnvVarNotFound {
                var_name: "DEEPSEEK_API_KEY".to_string(),
            })
            .into());
        }

        let client = LlmClient::new(&config)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// 使用指定客户端初始化应用
    pub fn with_client(config: Config, client: Arc<dyn ReasoningClient>) -> Self {
        log_startup(client.model_name(), &config.question_file);

        let flow = QuestionFlow::new(
            AnswerService::new(client),
            OutputWriter::new(&config.output_dir),
            RetryPolicy::from_config(&config),
        );
        let bookmark_writer = BookmarkWriter::new(&config.question_file);

        Self {
            config,
            flow,
            bookmark_writer,
        }
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let question_path = PathBuf::from(&self.config.question_file);
        let mut table = load_question_table(&question_path).await?;

        let start_index = table.resume_index();
        let total = table.remaining_from(start_index);
        log_questions_loaded(table.len(), start_index);

        if total == 0 {
            warn!("⚠️ 没有待处理的题目，程序结束");
            return Ok(RunSummary::default());
        }

        self.flow.output_writer().prepare()?;

        let mut summary = RunSummary {
            start_index,
            total,
            ..Default::default()
        };

        for row_index in start_index..table.len() {
            let ctx = QuestionCtx::new(row_index, start_index, total);

            match self.flow.run(&table.rows[row_index], &ctx).await {
                ProcessResult::Skipped => {
                    debug!("{} 空题干，跳过", ctx);
                    summary.skipped += 1;
                }
                ProcessResult::Success => {
                    summary.success += 1;
                    if table.rows[row_index].clear_bookmark() {
                        self.bookmark_writer.save(&table)?;
                        info!("{} 🔖 已清除书签", ctx);
                    }
                }
                ProcessResult::Exhausted { attempts } => {
                    warn!("{} ❌ 已尝试 {} 次仍失败，停止本次运行", ctx, attempts);
                    table.rows[row_index].mark_error();
                    self.bookmark_writer.save(&table)?;
                    log_bookmarked(ctx.file_line());

                    summary.outcome = RunOutcome::Bookmarked { row_index };
                    return Ok(summary);
                }
            }
        }

        let output_dir = self.flow.output_writer().output_dir();
        let output_dir = output_dir
            .canonicalize()
            .unwrap_or_else(|_| output_dir.to_path_buf());
        print_final_stats(summary.success, summary.skipped, total, &output_dir);

        Ok(summary)
    }
}
