//! 首页视图：课程列表 + 学生管理
//!
//! 对应状态流转：idle → loading → loaded。
//! 课程加载带序号守卫，被后续请求取代的旧响应会被丢弃。

use tracing::info;

use crate::api::CatalogApi;
use crate::error::{AppError, AppResult};
use crate::models::{Course, ListResponse, NewStudent, Student};

/// 首页视图状态
pub struct CatalogView {
    students: Vec<Student>,
    courses: Vec<Course>,
    count: i64,
    selected: Option<i64>,
    /// 课程加载序号，只有最新一次加载的结果会被应用
    load_seq: u64,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            courses: Vec::new(),
            count: 0,
            selected: None,
            load_seq: 0,
        }
    }

    /// 初始加载：全部课程 + 学生列表
    pub async fn init(&mut self, api: &dyn CatalogApi) -> AppResult<()> {
        self.load_all_courses(api).await?;
        self.refresh_students(api).await?;
        Ok(())
    }

    /// 加载全部课程
    pub async fn load_all_courses(&mut self, api: &dyn CatalogApi) -> AppResult<()> {
        let seq = self.begin_course_load();
        let data = api.list_courses().await?;
        self.apply_courses(seq, data);
        Ok(())
    }

    /// 刷新学生列表
    pub async fn refresh_students(&mut self, api: &dyn CatalogApi) -> AppResult<()> {
        self.students = api.list_students().await?.items;
        Ok(())
    }

    /// 切换学生选择
    ///
    /// None 表示清空选择、回到全部课程。
    pub async fn select_student(
        &mut self,
        api: &dyn CatalogApi,
        id: Option<i64>,
    ) -> AppResult<()> {
        self.selected = id;
        match id {
            None => self.load_all_courses(api).await,
            Some(id) => {
                let seq = self.begin_course_load();
                let data = api.student_courses(id).await?;
                self.apply_courses(seq, data);
                Ok(())
            }
        }
    }

    /// 新增学生
    ///
    /// 姓名去除首尾空白后不能为空；创建成功后刷新学生列表。
    pub async fn add_student(
        &mut self,
        api: &dyn CatalogApi,
        name: &str,
    ) -> AppResult<Student> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("学生姓名不能为空".to_string()));
        }

        let student = api
            .create_student(NewStudent {
                name: name.to_string(),
            })
            .await?;
        info!("Student created: id={}, name={}", student.id, student.name);

        self.refresh_students(api).await?;
        Ok(student)
    }

    /// 开始一次课程加载，返回本次加载的序号
    fn begin_course_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    /// 应用课程加载结果
    ///
    /// 序号已过期（期间有新的加载开始）时丢弃结果，返回 false。
    fn apply_courses(&mut self, seq: u64, data: ListResponse<Course>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.courses = data.items;
        self.count = data.count;
        true
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// 服务端报告的课程总数，原样展示
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}
