//! AI 选课推荐服务
//!
//! 封装 LlmClient，与配置系统集成：根据课程列表和专业构建提示词，
//! 调用 Chat Completions 接口并提取推荐文本。

use tracing::warn;

use crate::config::{get_config, AppConfig};
use crate::llm::{ChatMessage, ChatResponse, LlmClient, LlmError};

/// 固定的用户指令
const USER_PROMPT: &str = "请基于上面课程与专业，推荐我本学期该选择的课程，并说明理由。";

/// 模型无返回内容时的占位文本
const EMPTY_FALLBACK: &str = "(没有返回内容，检查模型/配额/参数)";

/// 构建系统提示词
///
/// 课程标题按 1 开始编号逐行列出，末尾附上针对指定专业的固定指令。
pub fn build_system_prompt(course_titles: &[String], major: &str) -> String {
    let course_list = course_titles
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "你是大学选课顾问。以下是可选课程列表（仅供参考）：\n{}\n请根据学生专业「{}」给出推荐课程，并简要说明理由。输出尽量精炼，给出 3-5 门即可。",
        course_list, major
    )
}

/// 从响应中提取推荐文本，无内容时退化为占位文本
fn answer_text(response: &ChatResponse) -> String {
    response
        .first_content()
        .map(str::to_string)
        .unwrap_or_else(|| EMPTY_FALLBACK.to_string())
}

/// 推荐服务
///
/// 未配置 API 密钥时 `client` 为 None，调用推荐接口前即失败，不发起网络请求。
pub struct RecommendService {
    client: Option<LlmClient>,
    model: String,
    temperature: f64,
}

impl RecommendService {
    /// 从全局配置创建推荐服务
    pub fn new() -> Self {
        Self::from_config(&get_config())
    }

    /// 从指定配置创建推荐服务
    pub fn from_config(config: &AppConfig) -> Self {
        let client = if config.llm_api_key.is_empty() {
            None
        } else {
            match LlmClient::new(&config.llm_api_key, &config.llm_base_url) {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!("Failed to build LLM client: {}", e);
                    None
                }
            }
        };

        Self {
            client,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// 是否已配置 API 密钥
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// 生成选课推荐
    pub async fn recommend(
        &self,
        course_titles: &[String],
        major: &str,
    ) -> Result<String, LlmError> {
        let client = self.client.as_ref().ok_or_else(|| {
            LlmError::Config(
                "LLM 客户端不可用：缺少 DEEPSEEK_API_KEY 或初始化失败，请检查 config.json 或环境变量".to_string(),
            )
        })?;

        let messages = vec![
            ChatMessage::system(build_system_prompt(course_titles, major)),
            ChatMessage::user(USER_PROMPT),
        ];

        let response = client.chat(messages, &self.model, self.temperature).await?;
        Ok(answer_text(&response))
    }
}

impl Default for RecommendService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_system_prompt() {
        let titles = vec!["Algorithms".to_string(), "Databases".to_string()];
        let prompt = build_system_prompt(&titles, "Computer Science");
        assert!(prompt.contains("1. Algorithms"));
        assert!(prompt.contains("2. Databases"));
        assert!(prompt.contains("Computer Science"));
    }

    #[test]
    fn test_answer_text_fallback() {
        // choices 缺失时退化为占位文本，而不是报错
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(answer_text(&response), EMPTY_FALLBACK);
    }

    #[test]
    fn test_answer_text_with_content() {
        let json = r#"{"choices":[{"message":{"content":"选数据库"}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(answer_text(&response), "选数据库");
    }

    #[tokio::test]
    async fn test_recommend_without_api_key() {
        let config = AppConfig::default();
        let service = RecommendService::from_config(&config);
        assert!(!service.is_configured());

        // 未配置密钥时不发起网络请求，直接返回配置错误
        let result = service
            .recommend(&["Algorithms".to_string()], "Computer Science")
            .await;
        assert!(matches!(result, Err(LlmError::Config(_))));
    }
}
