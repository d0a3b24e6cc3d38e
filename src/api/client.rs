//! 选课平台后端客户端
//!
//! 每个操作对应一次网络请求，无重试、无分页；
//! 非 2xx 状态码返回携带操作名的 `AppError::Request`。

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::llm::fix_base_url;
use crate::models::{Course, CoursePayload, ListResponse, NewStudent, Student};

/// 后端接口抽象
///
/// 视图层只依赖该 trait，便于在测试中替换为 mock 实现。
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// 获取全部课程
    async fn list_courses(&self) -> AppResult<ListResponse<Course>>;

    /// 获取全部学生
    async fn list_students(&self) -> AppResult<ListResponse<Student>>;

    /// 获取某个学生的课程
    async fn student_courses(&self, id: i64) -> AppResult<ListResponse<Course>>;

    /// 新增学生
    async fn create_student(&self, student: NewStudent) -> AppResult<Student>;

    /// 更新学生
    async fn update_student(&self, id: i64, student: NewStudent) -> AppResult<Student>;

    /// 删除学生
    async fn delete_student(&self, id: i64) -> AppResult<serde_json::Value>;

    /// 新增课程
    async fn create_course(&self, course: CoursePayload) -> AppResult<Course>;

    /// 更新课程
    async fn update_course(&self, id: i64, course: CoursePayload) -> AppResult<Course>;

    /// 删除课程
    async fn delete_course(&self, id: i64) -> AppResult<serde_json::Value>;
}

/// reqwest 实现
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// 创建新的后端客户端
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: fix_base_url(&base_url.into()),
        })
    }

    /// 发起请求并解析 JSON 响应
    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        operation: &str,
    ) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("API request: {} {}", method, url);

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("API error: operation={}, status={}", operation, status);
            return Err(AppError::request(operation, status.as_u16()));
        }

        // 所有端点（包括删除）都回显 JSON 资源
        Ok(response.json().await?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, operation: &str) -> AppResult<T> {
        self.request::<T, ()>(Method::GET, path, None, operation)
            .await
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn list_courses(&self) -> AppResult<ListResponse<Course>> {
        self.get("/api/courses", "list_courses").await
    }

    async fn list_students(&self) -> AppResult<ListResponse<Student>> {
        self.get("/api/students", "list_students").await
    }

    async fn student_courses(&self, id: i64) -> AppResult<ListResponse<Course>> {
        self.get(&format!("/api/students/{}/courses", id), "student_courses")
            .await
    }

    async fn create_student(&self, student: NewStudent) -> AppResult<Student> {
        self.request(
            Method::POST,
            "/api/students",
            Some(&student),
            "create_student",
        )
        .await
    }

    async fn update_student(&self, id: i64, student: NewStudent) -> AppResult<Student> {
        self.request(
            Method::PUT,
            &format!("/api/students/{}", id),
            Some(&student),
            "update_student",
        )
        .await
    }

    async fn delete_student(&self, id: i64) -> AppResult<serde_json::Value> {
        self.request::<_, ()>(
            Method::DELETE,
            &format!("/api/students/{}", id),
            None,
            "delete_student",
        )
        .await
    }

    async fn create_course(&self, course: CoursePayload) -> AppResult<Course> {
        self.request(
            Method::POST,
            "/api/courses",
            Some(&course),
            "create_course",
        )
        .await
    }

    async fn update_course(&self, id: i64, course: CoursePayload) -> AppResult<Course> {
        self.request(
            Method::PUT,
            &format!("/api/courses/{}", id),
            Some(&course),
            "update_course",
        )
        .await
    }

    async fn delete_course(&self, id: i64) -> AppResult<serde_json::Value> {
        self.request::<_, ()>(
            Method::DELETE,
            &format!("/api/courses/{}", id),
            None,
            "delete_course",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let client = CatalogClient::new("https://example.com/").unwrap();
        assert_eq!(client.base_url, "https://example.com");
    }
}
