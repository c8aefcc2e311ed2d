//! Page Handlers
//!
//! history 模式下直接访问页面地址时，返回对应视图的 HTML 外壳。
//! 路由表之外的路径也经这里按导航器规则匹配（末尾 `/`、大小写），仍未命中才 404

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Html,
};

use crate::application::View;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 页面外壳
pub async fn page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ApiError::NotFound(format!("Page not found: {}", uri.path())));
    }

    let route = state.navigator.resolve(uri.path())?.clone();
    let view = state.navigator.load_view(route.view()).await?;

    tracing::debug!(path = %route.path(), view = %view.id, "Serving page shell");

    Ok(Html(render_shell(&view, route.path())))
}

/// 外壳只嵌入路由表中的路径和视图自身的字段
fn render_shell(view: &View, route_path: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<div id=\"app\" data-route=\"{path}\" data-view=\"{component}\"></div>\n</body>\n</html>\n",
        title = view.title,
        path = route_path,
        component = view.component,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::route::ViewId;

    #[test]
    fn test_render_shell_embeds_view() {
        let view = View::new(ViewId::UploadPage, "Upload");
        let html = render_shell(&view, "/upload");
        assert!(html.contains("<title>Upload</title>"));
        assert!(html.contains("data-view=\"UploadPage\""));
        assert!(html.contains("data-route=\"/upload\""));
    }
}
