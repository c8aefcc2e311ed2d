//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod history;
mod user_api;
mod view_loader;

pub use history::{HistoryEntry, HistoryPort};
pub use user_api::{ApiResponse, UserApiError, UserApiPort};
pub use view_loader::{View, ViewError, ViewLoader};
