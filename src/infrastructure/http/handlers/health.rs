//! Health Handler
//!
//! 报告后端用户接口是否可达

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::application::UserApiPort;
use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub api_reachable: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let api_reachable = state.user_api.health_check().await;
    if !api_reachable {
        tracing::warn!("Backend API is unreachable");
    }
    Json(HealthResponse {
        status: if api_reachable { "ok" } else { "degraded" },
        api_reachable,
    })
}
