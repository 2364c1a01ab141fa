//! Domain identifiers (strongly-typed IDs).
//!
//! # TaskId
//! 永続化フォーマットでは id は JSON の数値です（作成時刻のミリ秒がベース）。
//! そのため ULID ではなく `i64` をラップした newtype にしています。
//!
//! - `#[serde(transparent)]` で `{"id": 1735723800000}` の形をそのまま保つ
//! - 生の `i64` と混同できないように型を分ける

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a Task (unique within its category).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// 内部の数値を取得
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TaskId> for i64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
