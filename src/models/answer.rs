use chrono::{DateTime, Local};
use serde::Serialize;

/// 时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 一道题的成功结果，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub timestamp: String,
    pub question: String,
    pub thoughts: String,
    pub final_answer: String,
}

impl AnswerRecord {
    pub fn new(
        at: DateTime<Local>,
        question: impl Into<String>,
        thoughts: impl Into<String>,
        final_answer: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            question: question.into(),
            thoughts: thoughts.into(),
            final_answer: final_answer.into(),
        }
    }

    /// JSON-lines 输出的嵌套结构
    pub fn to_json_line(&self) -> JsonLine<'_> {
        JsonLine {
            metadata: JsonMetadata {
                timestamp: &self.timestamp,
                question: &self.question,
            },
            response: JsonResponse {
                reasoning: &self.thoughts,
                answer: &self.final_answer,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonLine<'a> {
    pub metadata: JsonMetadata<'a>,
    pub response: JsonResponse<'a>,
}

#[derive(Debug, Serialize)]
pub struct JsonMetadata<'a> {
    pub timestamp: &'a str,
    pub question: &'a str,
}

#[derive(Debug, Serialize)]
pub struct JsonResponse<'a> {
    pub reasoning: &'a str,
    pub answer: &'a str,
}
