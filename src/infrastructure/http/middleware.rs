//! HTTP Middleware
//!
//! 请求结果日志：4xx 记 warn，5xx 记 error，附带耗时

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 状态码日志中间件
///
/// 业务错误的详细信息在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::trace!(method = %method, path = %path, elapsed_ms = elapsed_ms, "HTTP ok");
    }

    response
}
