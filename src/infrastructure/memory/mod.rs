//! Memory Layer - In-Memory State Management
//!
//! 实现 History，管理导航地址栈的内存状态

mod history;

pub use history::MemoryHistory;
