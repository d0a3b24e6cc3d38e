//! 统一错误处理模块
//!
//! 定义应用级错误类型，所有错误在 UI 边界处被捕获并直接展示给用户。

use thiserror::Error;

use crate::llm::LlmError;

/// 应用错误枚举
///
/// 配置类错误（如缺少 API 密钥）由 `LlmError::Config` 表达，经 `Llm` 变体传播。
#[derive(Error, Debug)]
pub enum AppError {
    /// 用户输入校验错误
    #[error("校验错误: {0}")]
    Validation(String),

    /// 后端接口返回非 2xx 状态码
    #[error("请求失败 ({operation}): HTTP {status}")]
    Request { operation: String, status: u16 },

    /// HTTP 传输层错误
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// LLM 调用错误
    #[error("{0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    /// 构造后端请求错误，记录失败的操作名
    pub fn request(operation: impl Into<String>, status: u16) -> Self {
        Self::Request {
            operation: operation.into(),
            status,
        }
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
