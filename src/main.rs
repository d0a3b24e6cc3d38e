//! RIC 选课平台 - Rust 终端前端
//!
//! 从远程 REST 后端读取课程与学生数据，并调用 Chat Completions 接口
//! 生成选课推荐。

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod ui;
mod utils;
mod views;

use api::CatalogClient;
use services::RecommendService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frontend_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RIC course platform frontend...");

    let config = config::get_config();
    info!("Backend base URL: {}", config.api_base_url);

    let client = CatalogClient::new(&config.api_base_url)?;
    let service = RecommendService::new();
    if !service.is_configured() {
        warn!("LLM API key not configured; recommendation feature is disabled");
    }

    ui::run(&client, &service).await
}
