//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（UserApi、History、ViewLoader）
//! - navigation: 客户端路由（路由表 + 历史记录 + 延迟视图）

pub mod navigation;
pub mod ports;

pub use navigation::{Navigation, NavigationError, Navigator};

pub use ports::{
    // User API
    ApiResponse,
    UserApiError,
    UserApiPort,
    // History
    HistoryEntry,
    HistoryPort,
    // Views
    View,
    ViewError,
    ViewLoader,
};
