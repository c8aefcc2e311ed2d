//! User Context - 用户上下文
//!
//! 职责:
//! - 用户接口的入参与请求体
//! - 上传文件描述

mod value_objects;

pub use value_objects::{CreateUserBody, UploadFile, UserId, UserName};
