//! InMemoryStorage - 開発・テスト用のストレージ
//!
//! プロセス終了で消えます。書き込み回数を数えているので、
//! 「この操作は永続化しない」ことをテストで確認できます。

use std::collections::HashMap;

use crate::ports::{KeyValueStorage, StorageError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存の値を持った状態で作成（起動時の復元テスト用）
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            writes: 0,
        }
    }

    /// これまでの `set` 呼び出し回数
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
