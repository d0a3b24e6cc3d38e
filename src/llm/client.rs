//! Chat Completions 客户端
//!
//! 非流式实现：一次请求对应一次完整响应。

use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, error};

use super::format::build_chat_endpoint;
use super::types::{ChatMessage, ChatRequest, ChatResponse, LlmError};
use crate::utils::RequestLogger;

/// LLM 客户端
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    logger: RequestLogger,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::Config("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
            logger: RequestLogger::default(),
        })
    }

    /// 调用 Chat Completions 接口
    ///
    /// 单次请求，无重试；非 2xx 状态码返回 `LlmError::Api`，携带原始响应体。
    pub async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        model: &str,
        temperature: f64,
    ) -> Result<ChatResponse, LlmError> {
        let endpoint = build_chat_endpoint(&self.base_url);
        let payload = ChatRequest {
            model: model.to_string(),
            messages,
            temperature,
        };

        let request_id = RequestLogger::generate_request_id();
        let entry = self.logger.log_request(
            &request_id,
            &endpoint,
            model,
            payload.messages.len(),
            temperature,
            &self.api_key,
        );
        let start_time = Instant::now();

        debug!("LLM request: endpoint={}, model={}", endpoint, model);

        let response = self
            .client
            .post(&endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                self.logger
                    .log_error(entry.clone(), start_time, &e.to_string(), None);
                LlmError::Http(e)
            })?;

        // 检查状态码
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "LLM API error: status={}, body={}",
                status_code,
                RequestLogger::truncate(&error_text, 500)
            );
            self.logger
                .log_error(entry, start_time, &error_text, Some(status_code));
            return Err(LlmError::Api {
                status: status_code,
                message: error_text,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            self.logger
                .log_error(entry.clone(), start_time, &e.to_string(), None);
            LlmError::Http(e)
        })?;

        let response_length = chat_response
            .first_content()
            .map(|c| c.len())
            .unwrap_or(0);
        self.logger.log_success(entry, start_time, response_length);

        Ok(chat_response)
    }
}
