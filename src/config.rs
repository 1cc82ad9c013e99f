use std::time::Duration;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目 CSV 文件路径（同时承载书签）
    pub question_file: String,
    /// 输出目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    // --- 重试配置 ---
    /// 首次失败后最多重试次数
    pub max_retries: u32,
    /// 第一次重试前的等待时间（秒），之后每次翻倍
    pub retry_base_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_file: "q.csv".to_string(),
            output_dir: "dset_generator".to_string(),
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.deepseek.com".to_string(),
            llm_model_name: "deepseek-reasoner".to_string(),
            request_timeout_secs: 600,
            max_retries: 3,
            retry_base_delay_secs: 60,
        }
    }
}

impl Config {
    /// 从环境变量加载配置（会先尝试读取 `.env`）
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let default = Self::default();
        Self {
            question_file: std::env::var("QUESTION_FILE").unwrap_or(default.question_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("DEEPSEEK_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            max_retries: std::env::var("MAX_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_retries),
            retry_base_delay_secs: std::env::var("RETRY_BASE_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.retry_base_delay_secs),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_secs(self.retry_base_delay_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_retry_schedule_settings() {
        let config = Config::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_base_delay(), Duration::from_secs(60));
        assert_eq!(config.question_file, "q.csv");
        assert_eq!(config.output_dir, "dset_generator");
    }
}
