//! 后端 REST API 客户端模块

mod client;

pub use client::{CatalogApi, CatalogClient};
