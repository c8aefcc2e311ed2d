//! HTTP Routes
//!
//! 页面路由直接取自路由表；其余路径交给页面处理器按导航器规则再匹配一次
//!
//! Endpoints:
//! - /              GET  PageMain 外壳
//! - /upload        GET  UploadPage 外壳
//! - /recognition   GET  RecognitionPage 外壳
//! - 其他           GET  `/Upload`、`/upload/` 等同样命中，否则 404
//! - /api/ping      GET  存活检查
//! - /api/health    GET  后端接口可达性

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;
use crate::domain::route::RouteTable;

/// 创建所有路由
pub fn create_routes(table: &RouteTable) -> Router<Arc<AppState>> {
    let pages = table
        .routes()
        .iter()
        .fold(Router::new(), |router, route| {
            router.route(route.path(), get(handlers::page))
        });

    pages
        .nest("/api", api_routes())
        .fallback(handlers::page)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/health", get(handlers::health))
}
