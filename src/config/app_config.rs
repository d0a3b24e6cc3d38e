//! 应用配置管理
//!
//! 配置在启动时加载一次：先读可执行文件同级目录的 config.json，
//! 再用环境变量覆盖，之后保持只读。

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 选课平台后端基础 URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// LLM API 基础 URL
    #[serde(default = "default_llm_base_url")]
    pub llm_base_url: String,

    /// LLM API 密钥
    #[serde(default)]
    pub llm_api_key: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 温度参数 (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,
}

fn default_api_base_url() -> String {
    "https://ric-course-platform-3.onrender.com".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.deepseek.com".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            llm_base_url: default_llm_base_url(),
            llm_api_key: String::new(),
            model: default_model(),
            temperature: default_temperature(),
        }
    }
}

/// 全局配置单例
static CONFIG: Lazy<RwLock<AppConfig>> = Lazy::new(|| RwLock::new(load_config()));

/// 从文件加载配置
fn load_config_from_file() -> Option<AppConfig> {
    let path = get_config_path();
    if path.exists() {
        let content = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&content).ok()
    } else {
        None
    }
}

/// 用环境变量覆盖配置项
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(v) = std::env::var("RIC_API_BASE_URL") {
        if !v.is_empty() {
            config.api_base_url = v;
        }
    }
    if let Ok(v) = std::env::var("DEEPSEEK_BASE_URL") {
        if !v.is_empty() {
            config.llm_base_url = v;
        }
    }
    if let Ok(v) = std::env::var("DEEPSEEK_API_KEY") {
        if !v.is_empty() {
            config.llm_api_key = v;
        }
    }
    if let Ok(v) = std::env::var("DEEPSEEK_MODEL") {
        if !v.is_empty() {
            config.model = v;
        }
    }
}

/// 加载完整配置（文件 + 环境变量）
fn load_config() -> AppConfig {
    let mut config = load_config_from_file().unwrap_or_default();
    apply_env_overrides(&mut config);
    config
}

/// 获取当前配置（克隆）
pub fn get_config() -> AppConfig {
    CONFIG.read().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.api_base_url,
            "https://ric-course-platform-3.onrender.com"
        );
        assert_eq!(config.llm_base_url, "https://api.deepseek.com");
        assert_eq!(config.model, "deepseek-chat");
        assert!(config.llm_api_key.is_empty());
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"llm_api_key":"sk-test"}"#).unwrap();
        assert_eq!(config.llm_api_key, "sk-test");
        assert_eq!(config.model, "deepseek-chat");
    }
}
