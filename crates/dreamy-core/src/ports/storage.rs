//! KeyValueStorage port - 永続化先（ブラウザの localStorage 相当）
//!
//! 値は文字列 blob で、読み書きは常に全体の上書きです（部分更新なし）。
//!
//! # 実装
//! - InMemoryStorage（テスト・開発用）
//! - FileStorage（ローカルディレクトリ）

use thiserror::Error;

/// StorageError は永続化アダプタの失敗
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key: `{0}`")]
    InvalidKey(String),

    #[error("storage I/O failed for key `{key}`")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// 文字列 key → 文字列 value のストレージ
///
/// # 設計原則
/// - 単一の書き手（store）だけが使う前提なのでロックは持たない
/// - 複数プロセスで同じ key を共有した場合は last-writer-wins
pub trait KeyValueStorage {
    /// 値を取得（存在しなければ `Ok(None)`）
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 値を丸ごと上書き
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
