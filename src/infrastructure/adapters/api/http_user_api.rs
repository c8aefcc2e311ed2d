//! HTTP User API Client - 调用后端用户接口
//!
//! 实现 UserApiPort trait，通过 HTTP 调用后端服务
//!
//! 后端 API:
//! GET  {base}/users
//! GET  {base}/users/{id}
//! POST {base}/create_user   Request: {"user_name": "..."}  (JSON)

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::application::ports::{ApiResponse, UserApiError, UserApiPort};
use crate::domain::user::{CreateUserBody, UserId, UserName};

/// HTTP 用户接口客户端配置
#[derive(Debug, Clone)]
pub struct HttpUserApiClientConfig {
    /// 后端服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpUserApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpUserApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 用户接口客户端
pub struct HttpUserApiClient {
    client: Client,
    base_url: String,
}

impl HttpUserApiClient {
    /// 创建新的客户端
    pub fn new(config: HttpUserApiClientConfig) -> Result<Self, UserApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UserApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &UserId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    fn create_user_url(&self) -> String {
        format!("{}/create_user", self.base_url)
    }
}

fn map_send_error(e: reqwest::Error) -> UserApiError {
    if e.is_timeout() {
        UserApiError::Timeout
    } else if e.is_connect() {
        UserApiError::Network(format!("Cannot connect to API service: {}", e))
    } else {
        UserApiError::Network(e.to_string())
    }
}

/// 解析响应体：优先 JSON，否则保留原始文本（空响应体为 `""`）
fn parse_body(text: String) -> serde_json::Value {
    serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text))
}

async fn into_api_response(response: Response) -> Result<ApiResponse, UserApiError> {
    let status = response.status();
    let headers = response.headers().clone();
    let text = response.text().await.map_err(|e| {
        if e.is_timeout() {
            UserApiError::Timeout
        } else {
            UserApiError::InvalidResponse(format!("Failed to read body: {}", e))
        }
    })?;
    let data = parse_body(text);

    if !status.is_success() {
        return Err(UserApiError::Status {
            status: status.as_u16(),
            data,
        });
    }

    Ok(ApiResponse {
        status: status.as_u16(),
        headers,
        data,
    })
}

#[async_trait]
impl UserApiPort for HttpUserApiClient {
    async fn list_users(&self) -> Result<ApiResponse, UserApiError> {
        let url = self.users_url();
        tracing::debug!(url = %url, "Listing users");

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;
        into_api_response(response).await
    }

    async fn get_user(&self, id: &UserId) -> Result<ApiResponse, UserApiError> {
        let url = self.user_url(id);
        tracing::debug!(url = %url, user_id = %id, "Fetching user");

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;
        into_api_response(response).await
    }

    async fn create_user(&self, name: &UserName) -> Result<ApiResponse, UserApiError> {
        let url = self.create_user_url();
        let body = CreateUserBody::from(name);
        tracing::debug!(url = %url, user_name = %name, "Creating user");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;
        let result = into_api_response(response).await;

        if let Ok(ref resp) = result {
            tracing::info!(user_name = %name, status = resp.status, "User created");
        }
        result
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.users_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
