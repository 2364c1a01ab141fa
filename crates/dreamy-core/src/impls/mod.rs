//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryStorage**: 開発・テスト用のストレージ
//! - **FileStorage**: ローカルディレクトリへの永続化
//! - **TracingNotifier / NoopNotifier**: 通知
//! - **TracingRenderer / NoopRenderer**: ヘッドレス描画

pub mod file_storage;
pub mod inmem_storage;
pub mod notifier;
pub mod renderer;

// 主要な型を再エクスポート
pub use self::file_storage::FileStorage;
pub use self::inmem_storage::InMemoryStorage;
pub use self::notifier::{NoopNotifier, TracingNotifier};
pub use self::renderer::{NoopRenderer, TracingRenderer};
