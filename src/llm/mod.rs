//! LLM 模块
//!
//! 封装 OpenAI 兼容的 Chat Completions 接口（默认 DeepSeek）。

mod client;
mod format;
mod types;

pub use client::LlmClient;
pub use format::fix_base_url;
pub use types::{ChatMessage, ChatResponse, LlmError};
