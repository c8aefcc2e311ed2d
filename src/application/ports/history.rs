//! History Port - 浏览历史
//!
//! 基于 history 模式的 URL 记录，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 历史记录条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// 完整地址（含查询串）
    pub location: String,
    /// 在历史栈中的位置
    pub position: usize,
    pub visited_at: DateTime<Utc>,
}

/// History Port
pub trait HistoryPort: Send + Sync {
    /// 压入新地址，丢弃当前位置之后的记录
    fn push(&self, location: &str) -> HistoryEntry;

    /// 替换当前地址
    fn replace(&self, location: &str) -> HistoryEntry;

    /// 前进/后退 `delta` 步，越界返回 None 且位置不变
    fn go(&self, delta: isize) -> Option<HistoryEntry>;

    /// 当前条目
    fn current(&self) -> Option<HistoryEntry>;

    /// 历史栈长度
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
