//! In-Memory History Implementation
//!
//! history 模式的地址栈：条目有序排列，游标指向当前条目

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::application::ports::{HistoryEntry, HistoryPort};

#[derive(Debug, Default)]
struct HistoryState {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

/// 内存历史记录
#[derive(Debug, Default)]
pub struct MemoryHistory {
    state: Mutex<HistoryState>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 全部条目（调试用）
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.state().entries.clone()
    }
}

fn entry(location: &str, position: usize) -> HistoryEntry {
    HistoryEntry {
        location: location.to_string(),
        position,
        visited_at: Utc::now(),
    }
}

impl HistoryPort for MemoryHistory {
    fn push(&self, location: &str) -> HistoryEntry {
        let mut state = self.state();
        let position = if state.entries.is_empty() {
            0
        } else {
            state.cursor + 1
        };
        state.entries.truncate(position);
        let new_entry = entry(location, position);
        state.entries.push(new_entry.clone());
        state.cursor = position;
        tracing::debug!(location = %location, position = position, "History push");
        new_entry
    }

    fn replace(&self, location: &str) -> HistoryEntry {
        let mut state = self.state();
        let position = state.cursor;
        let new_entry = entry(location, position);
        if state.entries.is_empty() {
            state.entries.push(new_entry.clone());
        } else {
            state.entries[position] = new_entry.clone();
        }
        tracing::debug!(location = %location, position = position, "History replace");
        new_entry
    }

    fn go(&self, delta: isize) -> Option<HistoryEntry> {
        let mut state = self.state();
        let target = state.cursor.checked_add_signed(delta)?;
        let found = state.entries.get(target)?.clone();
        state.cursor = target;
        Some(found)
    }

    fn current(&self) -> Option<HistoryEntry> {
        let state = self.state();
        state.entries.get(state.cursor).cloned()
    }

    fn len(&self) -> usize {
        self.state().entries.len()
    }
}
