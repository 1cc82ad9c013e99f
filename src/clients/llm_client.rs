/// LLM API 客户端
///
/// 封装对推理模型（兼容 OpenAI 的 chat/completions 接口）的调用。
/// 请求体使用 `async-openai` 的类型构建；响应中的 `reasoning_content`
/// 不在其标准响应类型里，因此由本模块自行反序列化。
use crate::config::Config;
use crate::error::{AppError, LlmError};
use anyhow::Result;
use async_openai::error::OpenAIError;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// 推理模型的一次回复
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReasoningReply {
    /// 思考过程
    pub reasoning: String,
    /// 最终答案
    pub answer: String,
}

/// 推理模型客户端
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    /// 以单条用户消息发起一次请求
    async fn ask(&self, user_message: &str) -> Result<ReasoningReply>;

    fn model_name(&self) -> &str;
}

/// DeepSeek（及其他兼容接口）客户端
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    api_base_url: String,
    model_name: String,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            api_key: config.llm_api_key.clone(),
            api_base_url: config.llm_api_base_url.clone(),
            model_name: config.llm_model_name.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base_url.trim_end_matches('/'))
    }

    fn build_request(&self, user_message: &str) -> Result<CreateChatCompletionRequest, LlmError> {
        let build_failed = |source: OpenAIError| LlmError::RequestBuildFailed {
            model: self.model_name.clone(),
            source,
        };

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(build_failed)?;

        CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .build()
            .map_err(build_failed)
    }
}

#[async_trait]
impl ReasoningClient for LlmClient {
    async fn ask(&self, user_message: &str) -> Result<ReasoningReply> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.chars().count());

        let request = self.build_request(user_message).map_err(AppError::from)?;

        let completion = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                AppError::llm_api_failed(&self.model_name, e)
            })?
            .json::<ReasoningCompletion>()
            .await
            .map_err(|e| AppError::llm_api_failed(&self.model_name, e))?;

        debug!("LLM API 调用成功");

        Ok(completion.into_reply(&self.model_name)?)
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

// ========== 响应结构 ==========

#[derive(Debug, Deserialize)]
struct ReasoningCompletion {
    #[serde(default)]
    choices: Vec<ReasoningChoice>,
}

#[derive(Debug, Deserialize)]
struct ReasoningChoice {
    message: ReasoningMessage,
}

#[derive(Debug, Deserialize)]
struct ReasoningMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_content: Option<String>,
}

impl ReasoningCompletion {
    /// 取第一个 choice；字段缺失时按空字符串处理
    fn into_reply(self, model: &str) -> Result<ReasoningReply, AppError> {
        let message = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse {
                model: model.to_string(),
            })?
            .message;

        Ok(ReasoningReply {
            reasoning: message.reasoning_content.unwrap_or_default(),
            answer: message.content.unwrap_or_default(),
        })
    }
}
