//! API Adapter - HTTP 用户接口客户端实现

mod http_user_api;

pub use http_user_api::*;
