//! Route Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("路由路径重复: {0}")]
    DuplicatePath(String),

    #[error("无效的路由路径: {0}")]
    InvalidPath(String),
}
