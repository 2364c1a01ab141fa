//! App - アプリケーション層
//!
//! このモジュールは、store と ports を組み合わせて UI 操作の流れを実装します。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: 構築とワイヤリング（起動時検証つき）
//! - **TodoApp**: 操作 → 保存 → 進捗再計算 → 描画 → 通知
//! - **notice**: 操作ごとの通知メッセージ

pub mod builder;
pub mod notice;
pub mod todo_app;

// 主要な型を再エクスポート
pub use self::builder::{AppBuilder, BuildError};
pub use self::todo_app::TodoApp;
