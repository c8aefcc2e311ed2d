//! Navigator - 客户端路由
//!
//! 把静态路由表装入带历史记录的导航器：
//! - 路径匹配到视图（末尾 `/` 可有可无，大小写不敏感）
//! - 视图在第一次访问时加载，之后复用
//! - 成功导航后才写入历史记录

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::application::ports::{HistoryEntry, HistoryPort, View, ViewError, ViewLoader};
use crate::domain::route::{Route, RouteTable, ViewId};

/// 导航错误
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No route matches path: {0}")]
    NoMatch(String),

    #[error("No loader registered for view: {0}")]
    MissingLoader(ViewId),

    #[error("History position out of range: {0}")]
    OutOfRange(isize),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// 一次成功导航的结果
#[derive(Debug, Clone)]
pub struct Navigation {
    pub entry: HistoryEntry,
    pub route: Route,
    pub view: Arc<View>,
}

struct LazyView {
    loader: ViewLoader,
    cell: OnceCell<Arc<View>>,
}

/// 导航器
pub struct Navigator {
    table: RouteTable,
    views: HashMap<ViewId, LazyView>,
    history: Arc<dyn HistoryPort>,
}

impl Navigator {
    /// 创建导航器
    ///
    /// 路由表中的每个视图都必须有对应的加载器
    pub fn new(
        table: RouteTable,
        loaders: Vec<ViewLoader>,
        history: Arc<dyn HistoryPort>,
    ) -> Result<Self, NavigationError> {
        let views: HashMap<ViewId, LazyView> = loaders
            .into_iter()
            .map(|loader| {
                (
                    loader.view(),
                    LazyView {
                        loader,
                        cell: OnceCell::new(),
                    },
                )
            })
            .collect();

        if let Some(route) = table.routes().iter().find(|r| !views.contains_key(&r.view())) {
            return Err(NavigationError::MissingLoader(route.view()));
        }

        tracing::debug!(routes = table.len(), "Navigator installed");

        Ok(Self {
            table,
            views,
            history,
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// 仅匹配，不加载视图，不改动历史
    pub fn resolve(&self, location: &str) -> Result<&Route, NavigationError> {
        self.table
            .resolve(location)
            .ok_or_else(|| NavigationError::NoMatch(location.to_string()))
    }

    /// 加载视图（每个视图只加载一次；失败不缓存）
    pub async fn load_view(&self, view: ViewId) -> Result<Arc<View>, NavigationError> {
        let lazy = self
            .views
            .get(&view)
            .ok_or(NavigationError::MissingLoader(view))?;

        let loaded = lazy
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(view = %view, "Loading view");
                lazy.loader.load().await.map(Arc::new)
            })
            .await?;

        Ok(loaded.clone())
    }

    /// 视图是否已加载
    pub fn is_loaded(&self, view: ViewId) -> bool {
        self.views
            .get(&view)
            .map(|lazy| lazy.cell.initialized())
            .unwrap_or(false)
    }

    /// 导航到新地址（压入历史）
    pub async fn push(&self, location: &str) -> Result<Navigation, NavigationError> {
        let (route, view) = self.prepare(location).await?;
        let entry = self.history.push(location);
        tracing::info!(location = %location, view = %route.view(), "Navigated");
        Ok(Navigation { entry, route, view })
    }

    /// `push` 的别名
    pub async fn navigate(&self, location: &str) -> Result<Navigation, NavigationError> {
        self.push(location).await
    }

    /// 导航到新地址（替换当前历史条目）
    pub async fn replace(&self, location: &str) -> Result<Navigation, NavigationError> {
        let (route, view) = self.prepare(location).await?;
        let entry = self.history.replace(location);
        tracing::info!(location = %location, view = %route.view(), "Navigated (replace)");
        Ok(Navigation { entry, route, view })
    }

    /// 在历史中移动 `delta` 步
    pub async fn go(&self, delta: isize) -> Result<Navigation, NavigationError> {
        let entry = self
            .history
            .go(delta)
            .ok_or(NavigationError::OutOfRange(delta))?;
        let route = self.resolve(&entry.location)?.clone();
        let view = self.load_view(route.view()).await?;
        tracing::debug!(location = %entry.location, delta = delta, "History moved");
        Ok(Navigation { entry, route, view })
    }

    pub async fn back(&self) -> Result<Navigation, NavigationError> {
        self.go(-1).await
    }

    pub async fn forward(&self) -> Result<Navigation, NavigationError> {
        self.go(1).await
    }

    /// 当前地址
    pub fn current(&self) -> Option<HistoryEntry> {
        self.history.current()
    }

    async fn prepare(&self, location: &str) -> Result<(Route, Arc<View>), NavigationError> {
        let route = match self.resolve(location) {
            Ok(route) => route.clone(),
            Err(e) => {
                tracing::warn!(location = %location, "No route matched");
                return Err(e);
            }
        };
        let view = self.load_view(route.view()).await?;
        Ok((route, view))
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("table", &self.table)
            .field("current", &self.history.current())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::route::default_routes;
    use crate::infrastructure::memory::MemoryHistory;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_loader(view: ViewId, counter: Arc<AtomicUsize>) -> ViewLoader {
        ViewLoader::new(view, move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, ViewError>(View::new(view, view.component_name()))
            }
        })
    }

    fn navigator_with_counters() -> (Navigator, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        let loaders = ViewId::ALL
            .iter()
            .map(|v| counting_loader(*v, counter.clone()))
            .collect();
        let navigator =
            Navigator::new(default_routes(), loaders, Arc::new(MemoryHistory::new())).unwrap();
        (navigator, counter)
    }

    #[tokio::test]
    async fn test_navigate_resolves_each_route() {
        let (navigator, _) = navigator_with_counters();

        let nav = navigator.navigate("/").await.unwrap();
        assert_eq!(nav.view.id, ViewId::PageMain);
        let nav = navigator.navigate("/upload").await.unwrap();
        assert_eq!(nav.view.id, ViewId::UploadPage);
        let nav = navigator.navigate("/recognition").await.unwrap();
        assert_eq!(nav.view.id, ViewId::RecognitionPage);
        assert_eq!(nav.view.component, "RecognitionPage");
    }

    #[tokio::test]
    async fn test_unmatched_path_leaves_history_untouched() {
        let (navigator, counter) = navigator_with_counters();
        navigator.navigate("/").await.unwrap();

        let err = navigator.navigate("/users").await.unwrap_err();
        assert!(matches!(err, NavigationError::NoMatch(p) if p == "/users"));
        assert_eq!(navigator.current().unwrap().location, "/");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_views_load_lazily_and_once() {
        let (navigator, counter) = navigator_with_counters();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!navigator.is_loaded(ViewId::UploadPage));

        navigator.navigate("/upload").await.unwrap();
        navigator.navigate("/").await.unwrap();
        navigator.navigate("/upload?again=1").await.unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(navigator.is_loaded(ViewId::UploadPage));
        assert!(!navigator.is_loaded(ViewId::RecognitionPage));
    }

    #[tokio::test]
    async fn test_back_and_forward() {
        let (navigator, _) = navigator_with_counters();
        navigator.push("/").await.unwrap();
        navigator.push("/upload").await.unwrap();
        navigator.push("/recognition").await.unwrap();

        let nav = navigator.back().await.unwrap();
        assert_eq!(nav.route.path(), "/upload");
        let nav = navigator.go(-1).await.unwrap();
        assert_eq!(nav.view.id, ViewId::PageMain);
        let nav = navigator.forward().await.unwrap();
        assert_eq!(nav.entry.location, "/upload");

        assert!(matches!(
            navigator.go(5).await.unwrap_err(),
            NavigationError::OutOfRange(5)
        ));
        assert_eq!(navigator.current().unwrap().location, "/upload");
    }

    #[tokio::test]
    async fn test_replace_keeps_history_length() {
        let history = Arc::new(MemoryHistory::new());
        let loaders = ViewId::ALL
            .iter()
            .map(|v| counting_loader(*v, Arc::new(AtomicUsize::new(0))))
            .collect();
        let navigator = Navigator::new(default_routes(), loaders, history.clone()).unwrap();

        navigator.push("/").await.unwrap();
        navigator.replace("/recognition").await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(navigator.current().unwrap().location, "/recognition");
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let flaky = {
            let attempts = attempts.clone();
            ViewLoader::new(ViewId::UploadPage, move || {
                let attempts = attempts.clone();
                async move {
                    if attempts.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(ViewError::LoadFailed {
                            view: ViewId::UploadPage,
                            reason: "chunk fetch failed".to_string(),
                        })
                    } else {
                        Ok(View::new(ViewId::UploadPage, "Upload"))
                    }
                }
            })
        };
        let counter = Arc::new(AtomicUsize::new(0));
        let loaders = vec![
            counting_loader(ViewId::PageMain, counter.clone()),
            flaky,
            counting_loader(ViewId::RecognitionPage, counter),
        ];
        let navigator =
            Navigator::new(default_routes(), loaders, Arc::new(MemoryHistory::new())).unwrap();

        assert!(matches!(
            navigator.navigate("/upload").await.unwrap_err(),
            NavigationError::View(_)
        ));
        assert!(navigator.current().is_none());

        let nav = navigator.navigate("/upload").await.unwrap();
        assert_eq!(nav.view.title, "Upload");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_missing_loader_rejected() {
        let counter = Arc::new(AtomicUsize::new(0));
        let loaders = vec![counting_loader(ViewId::PageMain, counter)];
        let result = Navigator::new(default_routes(), loaders, Arc::new(MemoryHistory::new()));
        assert!(matches!(
            result.unwrap_err(),
            NavigationError::MissingLoader(ViewId::UploadPage)
        ));
    }

    #[tokio::test]
    async fn test_navigate_tolerates_trailing_slash_and_case() {
        let (navigator, _) = navigator_with_counters();

        let nav = navigator.navigate("/Upload/").await.unwrap();
        assert_eq!(nav.view.id, ViewId::UploadPage);
        assert_eq!(nav.route.path(), "/upload");
        // 历史记录保留用户访问的原始地址
        assert_eq!(nav.entry.location, "/Upload/");
    }

    #[test]
    fn test_resolve_does_not_touch_history() {
        let (navigator, counter) = navigator_with_counters();
        assert_eq!(navigator.resolve("/recognition").unwrap().view(), ViewId::RecognitionPage);
        assert!(navigator.current().is_none());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
