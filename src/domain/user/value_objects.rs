//! User Context - Value Objects

use serde::{Deserialize, Serialize};

/// 用户标识
///
/// 原样拼接进 URL，不做校验与转义
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// 用户名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName(String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// 创建用户请求体
///
/// 线上格式: `{"user_name": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserBody {
    pub user_name: String,
}

impl From<&UserName> for CreateUserBody {
    fn from(name: &UserName) -> Self {
        Self {
            user_name: name.as_str().to_string(),
        }
    }
}

/// 待上传的文件
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// 原始文件名
    pub file_name: String,
    /// MIME 类型
    pub content_type: Option<String>,
    /// 文件内容
    pub data: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_is_verbatim() {
        let id = UserId::new(" 42/a ");
        assert_eq!(id.as_str(), " 42/a ");
        assert_eq!(id.to_string(), " 42/a ");
    }

    #[test]
    fn test_create_user_body_wire_format() {
        let body = CreateUserBody::from(&UserName::new("alice"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "user_name": "alice" }));
    }

    #[test]
    fn test_upload_file_builder() {
        let file = UploadFile::new("scan.png", vec![1, 2, 3]).with_content_type("image/png");
        assert_eq!(file.size(), 3);
        assert_eq!(file.content_type.as_deref(), Some("image/png"));
    }
}
