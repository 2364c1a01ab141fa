use thiserror::Error;

use crate::domain::ValidationError;
use crate::ports::StorageError;

/// StoreError は TaskStore の mutator が返すエラー
///
/// 見つからない id はエラーではありません（戻り値で表現します）。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to persist tasks")]
    Storage(#[from] StorageError),

    #[error("failed to encode task snapshot")]
    Encode(#[from] serde_json::Error),
}
