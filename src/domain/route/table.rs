//! Route Table - 静态路由表

use std::collections::HashSet;

use super::errors::RouteError;
use super::value_objects::{normalize_path, Route, ViewId};

/// 不可变路由表
///
/// 不变量:
/// - 路径以 `/` 开头
/// - 路径互不重复（忽略大小写与末尾 `/`）
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path().starts_with('/') {
                return Err(RouteError::InvalidPath(route.path().to_string()));
            }
            if !seen.insert(normalize_path(route.path()).to_ascii_lowercase()) {
                return Err(RouteError::DuplicatePath(route.path().to_string()));
            }
        }
        Ok(Self { routes })
    }

    /// 匹配路径
    ///
    /// 末尾 `/` 可有可无，大小写不敏感；除此之外逐字比较
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|r| normalize_path(r.path()).eq_ignore_ascii_case(path))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// 应用路由表
///
/// - `/`            -> PageMain
/// - `/upload`      -> UploadPage
/// - `/recognition` -> RecognitionPage
pub fn default_routes() -> RouteTable {
    RouteTable {
        routes: vec![
            Route::new("/", ViewId::PageMain),
            Route::new("/upload", ViewId::UploadPage),
            Route::new("/recognition", ViewId::RecognitionPage),
        ],
    }
}
