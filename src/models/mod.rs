//! 后端 REST API 数据模型

use serde::{Deserialize, Serialize};

/// 课程
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub title: String,
}

/// 学生
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

/// 列表响应
///
/// 课程接口返回 `{items, count}`；学生接口只返回 `{items}`，
/// 因此两个字段都带默认值。`count` 以服务端为准，客户端不重新计算。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub count: i64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
        }
    }
}

/// 新增学生请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
}

/// 新增/更新课程请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoursePayload {
    pub code: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_list() {
        let json = r#"{"items":[{"id":1,"code":"CS101","title":"Intro"}],"count":1}"#;
        let list: ListResponse<Course> = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].code, "CS101");
        assert_eq!(list.items[0].title, "Intro");
        assert_eq!(list.count, 1);
    }

    #[test]
    fn test_parse_items_only_shape() {
        // 学生接口不带 count 字段
        let json = r#"{"items":[{"id":7,"name":"Alice"}]}"#;
        let list: ListResponse<Student> = serde_json::from_str(json).unwrap();
        assert_eq!(list.items[0].name, "Alice");
        assert_eq!(list.count, 0);
    }

    #[test]
    fn test_parse_empty_object() {
        let list: ListResponse<Course> = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());
        assert_eq!(list.count, 0);
    }
}
