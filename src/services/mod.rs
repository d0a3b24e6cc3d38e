//! 业务服务模块

mod recommend;

pub use recommend::RecommendService;
