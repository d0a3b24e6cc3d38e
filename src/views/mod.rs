//! 视图状态模块
//!
//! 视图状态只通过各自的转换方法更新，网络访问经由注入的 `CatalogApi`。

mod catalog;
mod recommend;

pub use catalog::CatalogView;
pub use recommend::RecommendView;
