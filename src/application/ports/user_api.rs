//! User API Port - 后端用户接口抽象
//!
//! 定义用户接口的抽象，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use http::HeaderMap;
use thiserror::Error;

use crate::domain::user::{UploadFile, UserId, UserName};

/// 用户接口错误
///
/// 底层 HTTP 失败原样向上传递，不做重试
#[derive(Debug, Error)]
pub enum UserApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// 非 2xx 响应
    #[error("HTTP {status}: {data}")]
    Status { status: u16, data: serde_json::Value },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

/// 后端原始响应
///
/// 不做任何业务解析，调用方自行处理 `data`
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP 状态码
    pub status: u16,
    /// 响应头
    pub headers: HeaderMap,
    /// 响应体：JSON 解析结果；非 JSON（含空响应体）时为原始文本字符串
    pub data: serde_json::Value,
}

/// User API Port
///
/// 每个方法恰好发出一次请求，结果原样返回
#[async_trait]
pub trait UserApiPort: Send + Sync {
    /// GET {base}/users
    async fn list_users(&self) -> Result<ApiResponse, UserApiError>;

    /// GET {base}/users/{id}
    async fn get_user(&self, id: &UserId) -> Result<ApiResponse, UserApiError>;

    /// POST {base}/create_user  body: {"user_name": ...}
    async fn create_user(&self, name: &UserName) -> Result<ApiResponse, UserApiError>;

    /// 上传文件
    ///
    /// 后端契约尚未定义，默认不发出任何请求
    async fn upload_file(&self, file: UploadFile) -> Result<ApiResponse, UserApiError> {
        tracing::warn!(
            file_name = %file.file_name,
            size = file.size(),
            "upload_file is not implemented"
        );
        Err(UserApiError::NotImplemented("upload_file"))
    }

    /// 检查后端是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
