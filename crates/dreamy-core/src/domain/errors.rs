//! Errors - ドメインエラー
//!
//! 致命的なエラーはありません。入力ミスは ValidationError として UI に返し、
//! 見つからない id は結果の値（None / NotFound / false）で表現します。

use thiserror::Error;

/// 入力値の検証エラー（UI でメッセージとして表示される）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task text must not be empty")]
    EmptyText,
}

/// 未知のカテゴリ識別子
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: `{0}`")]
pub struct UnknownCategory(pub String);
