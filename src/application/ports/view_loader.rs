//! View Loader Port - 页面视图延迟加载
//!
//! 视图只有在其路由第一次被访问时才加载

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use serde::Serialize;
use thiserror::Error;

use crate::domain::route::ViewId;

/// 视图加载错误
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Failed to load view {view}: {reason}")]
    LoadFailed { view: ViewId, reason: String },
}

/// 已加载的页面视图
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub id: ViewId,
    /// 页面组件名
    pub component: &'static str,
    /// 页面标题
    pub title: String,
    pub loaded_at: DateTime<Utc>,
}

impl View {
    pub fn new(id: ViewId, title: impl Into<String>) -> Self {
        Self {
            id,
            component: id.component_name(),
            title: title.into(),
            loaded_at: Utc::now(),
        }
    }
}

type LoadFuture = BoxFuture<'static, Result<View, ViewError>>;

/// 延迟视图加载器
#[derive(Clone)]
pub struct ViewLoader {
    view: ViewId,
    load: Arc<dyn Fn() -> LoadFuture + Send + Sync>,
}

impl ViewLoader {
    pub fn new<F, Fut>(view: ViewId, load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<View, ViewError>> + Send + 'static,
    {
        Self {
            view,
            load: Arc::new(move || Box::pin(load())),
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }

    /// 执行加载
    pub fn load(&self) -> LoadFuture {
        (self.load)()
    }
}

impl std::fmt::Debug for ViewLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewLoader").field("view", &self.view).finish()
    }
}
