//! Route Context - Value Objects

use serde::Serialize;

/// 页面视图标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewId {
    PageMain,
    UploadPage,
    RecognitionPage,
}

impl ViewId {
    /// 所有视图
    pub const ALL: [ViewId; 3] = [ViewId::PageMain, ViewId::UploadPage, ViewId::RecognitionPage];

    /// 页面组件名
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::PageMain => "PageMain",
            Self::UploadPage => "UploadPage",
            Self::RecognitionPage => "RecognitionPage",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.component_name())
    }
}

/// 路由记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    path: String,
    view: ViewId,
}

impl Route {
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> ViewId {
        self.view
    }
}

/// 规范化待匹配的路径
///
/// 去掉查询串与片段，空路径视为 `/`，非根路径去掉一个末尾 `/`
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = &raw[..end];
    match path {
        "" => "/",
        "/" => path,
        _ => path.strip_suffix('/').unwrap_or(path),
    }
}
