//! Page Views - 页面视图加载器
//!
//! 三个页面各自独立加载，只在路由第一次被访问时执行

use std::sync::Arc;

use crate::application::ports::{HistoryPort, View, ViewError, ViewLoader};
use crate::application::{NavigationError, Navigator};
use crate::domain::route::{default_routes, ViewId};

/// 页面标题
fn title_of(view: ViewId) -> &'static str {
    match view {
        ViewId::PageMain => "Home",
        ViewId::UploadPage => "Upload",
        ViewId::RecognitionPage => "Recognition",
    }
}

async fn load_page(view: ViewId) -> Result<View, ViewError> {
    tracing::info!(view = %view, "Fetching page view");
    Ok(View::new(view, title_of(view)))
}

/// 默认的页面加载器
pub fn default_loaders() -> Vec<ViewLoader> {
    ViewId::ALL
        .iter()
        .map(|view| {
            let view = *view;
            ViewLoader::new(view, move || load_page(view))
        })
        .collect()
}

/// 创建应用路由：默认路由表 + 默认页面 + 给定历史记录
pub fn create_router(history: Arc<dyn HistoryPort>) -> Result<Navigator, NavigationError> {
    Navigator::new(default_routes(), default_loaders(), history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryHistory;

    #[test]
    fn test_every_view_has_a_loader() {
        let loaders = default_loaders();
        assert_eq!(loaders.len(), 3);
        for view in ViewId::ALL {
            assert!(loaders.iter().any(|l| l.view() == view));
        }
    }

    #[tokio::test]
    async fn test_create_router_navigates_all_pages() {
        let router = create_router(Arc::new(MemoryHistory::new())).unwrap();
        for (path, title) in [("/", "Home"), ("/upload", "Upload"), ("/recognition", "Recognition")] {
            let nav = router.navigate(path).await.unwrap();
            assert_eq!(nav.view.title, title);
        }
        assert!(router.navigate("/settings").await.is_err());
    }
}
