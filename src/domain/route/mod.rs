//! Route Context - 路由限界上下文
//!
//! 职责:
//! - 路由记录（路径 -> 视图）
//! - 路由表的构建与路径匹配

mod errors;
mod table;
mod value_objects;

pub use errors::RouteError;
pub use table::{default_routes, RouteTable};
pub use value_objects::{normalize_path, Route, ViewId};
