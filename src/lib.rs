//! Recog - 用户管理与识别页面的前端壳
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 用户接口入参与请求体
//! - Route Context: 页面路由表
//!
//! 应用层 (application/):
//! - Ports: 端口定义（UserApi, History, ViewLoader）
//! - Navigation: 客户端路由
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 后端用户接口 HTTP 客户端
//! - Memory: 内存历史记录
//! - Views: 页面延迟加载器
//! - HTTP: 页面外壳服务

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
