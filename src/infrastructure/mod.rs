//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;
pub mod memory;
pub mod views;

pub use adapters::{HttpUserApiClient, HttpUserApiClientConfig};
pub use memory::MemoryHistory;
pub use views::{create_router, default_loaders};
