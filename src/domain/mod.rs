//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - User Context: 用户接口数据
//! - Route Context: 页面路由表

pub mod route;
pub mod user;
