//! Application State
//!
//! HTTP 层共享的导航器与后端接口

use std::sync::Arc;

use crate::application::{Navigator, UserApiPort};

/// 应用状态
pub struct AppState {
    pub navigator: Arc<Navigator>,
    pub user_api: Arc<dyn UserApiPort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(navigator: Arc<Navigator>, user_api: Arc<dyn UserApiPort>) -> Self {
        Self {
            navigator,
            user_api,
        }
    }
}
