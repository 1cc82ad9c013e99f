//! 答题服务 - 业务能力层
//!
//! 只负责"把一道题交给推理模型并得到结果"，不关心重试和落盘

use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use crate::clients::ReasoningClient;
use crate::models::AnswerRecord;

/// 发送给模型的提示词前缀
pub const PROMPT_PREFIX: &str = "answer this question: ";

/// 答题服务
///
/// 职责：
/// - 构建提示词
/// - 调用一次推理模型
/// - 把回复整理成 `AnswerRecord`
pub struct AnswerService {
    client: Arc<dyn ReasoningClient>,
}

impl AnswerService {
    pub fn new(client: Arc<dyn ReasoningClient>) -> Self {
        Self { client }
    }

    /// 单次请求，不做重试
    pub async fn answer(&self, question: &str) -> Result<AnswerRecord> {
        let prompt = build_prompt(question);
        debug!("提示词长度: {} 字符", prompt.chars().count());

        let reply = self.client.ask(&prompt).await?;

        Ok(AnswerRecord::new(
            chrono::Local::now(),
            question,
            reply.reasoning,
            reply.answer,
        ))
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }
}

fn build_prompt(question: &str) -> String {
    format!("{}{}", PROMPT_PREFIX, question)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ReasoningReply;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct EchoClient {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ReasoningClient for EchoClient {
        async fn ask(&self, user_message: &str) -> Result<ReasoningReply> {
            self.prompts.lock().unwrap().push(user_message.to_string());
            Ok(ReasoningReply {
                reasoning: "想一想".to_string(),
                answer: "42".to_string(),
            })
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_answer_wraps_prompt_and_reply() {
        let client = Arc::new(EchoClient {
            prompts: Mutex::new(Vec::new()),
        });
        let service = AnswerService::new(client.clone());

        let record = service.answer("生命的意义是什么？").await.unwrap();

        assert_eq!(
            client.prompts.lock().unwrap().as_slice(),
            ["answer this question: 生命的意义是什么？"]
        );
        assert_eq!(record.question, "生命的意义是什么？");
        assert_eq!(record.thoughts, "想一想");
        assert_eq!(record.final_answer, "42");
        assert_eq!(record.timestamp.len(), "2025-01-01 00:00:00".len());
        assert_eq!(service.model_name(), "echo");
    }
}
