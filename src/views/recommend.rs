//! AI 推荐视图
//!
//! 状态流转：idle → generating → done；校验失败直接回到 idle。
//! 同一时间最多一个生成请求在途。

use crate::api::CatalogApi;
use crate::error::{AppError, AppResult};
use crate::services::RecommendService;

/// 推荐视图状态
pub struct RecommendView {
    course_titles: Vec<String>,
    answer: String,
    generating: bool,
}

impl RecommendView {
    pub fn new() -> Self {
        Self {
            course_titles: Vec::new(),
            answer: String::new(),
            generating: false,
        }
    }

    /// 进入视图时加载一次全部课程标题
    pub async fn init(&mut self, api: &dyn CatalogApi) -> AppResult<()> {
        let data = api.list_courses().await?;
        self.course_titles = data.items.into_iter().map(|c| c.title).collect();
        Ok(())
    }

    /// 已加载的课程标题数量
    pub fn titles_loaded(&self) -> usize {
        self.course_titles.len()
    }

    /// 是否有生成请求在途
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// 最近一次生成的推荐文本
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// 生成选课推荐
    ///
    /// 在途请求未结束、专业为空或课程列表为空时直接返回校验错误，
    /// 不触碰网络；成功或失败后视图都回到就绪状态。
    pub async fn generate(
        &mut self,
        service: &RecommendService,
        major: &str,
    ) -> AppResult<&str> {
        if self.generating {
            return Err(AppError::Validation(
                "正在生成推荐，请等待当前请求完成".to_string(),
            ));
        }

        let major = major.trim();
        if major.is_empty() {
            return Err(AppError::Validation("请先输入专业".to_string()));
        }
        if self.course_titles.is_empty() {
            return Err(AppError::Validation(
                "课程列表为空，无法生成推荐".to_string(),
            ));
        }

        self.generating = true;
        self.answer.clear();

        let result = service.recommend(&self.course_titles, major).await;
        self.generating = false;

        match result {
            Ok(text) => {
                self.answer = text;
                Ok(self.answer.as_str())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for RecommendView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn unconfigured_service() -> RecommendService {
        // 默认配置没有 API 密钥
        RecommendService::from_config(&AppConfig::default())
    }

    fn view_with_titles() -> RecommendView {
        let mut view = RecommendView::new();
        view.course_titles = vec!["Algorithms".to_string(), "Databases".to_string()];
        view
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_major() {
        let service = unconfigured_service();
        let mut view = view_with_titles();

        // 校验在配置检查之前，未配置密钥也应返回校验错误
        let result = view.generate(&service, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_titles() {
        let service = unconfigured_service();
        let mut view = RecommendView::new();

        let result = view.generate(&service, "Computer Science").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_rejects_concurrent_invocation() {
        let service = unconfigured_service();
        let mut view = view_with_titles();
        view.generating = true;

        let result = view.generate(&service, "Computer Science").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_without_api_key_reports_config_error() {
        let service = unconfigured_service();
        let mut view = view_with_titles();

        let result = view.generate(&service, "Computer Science").await;
        assert!(matches!(result, Err(AppError::Llm(_))));
        // 失败后视图回到就绪状态
        assert!(!view.is_generating());
        assert!(view.answer().is_empty());
    }
}
