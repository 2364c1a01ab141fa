//! dreamy-core
//!
//! 4 つの固定カテゴリを持つ TODO リストの状態管理コア。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Category, TaskId, Task, TaskBoard, 進捗・レアリティ）
//! - **ports**: 抽象化レイヤー（KeyValueStorage, Clock, IdGenerator, Notifier, Renderer）
//! - **store**: TaskStore（操作・永続化・起動時の復元）
//! - **app**: アプリケーション層（AppBuilder, TodoApp）
//! - **impls**: 実装（InMemoryStorage, FileStorage など）
//! - **config**: StoreConfig（TOML から読み込み可能）

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod store;

pub use app::{AppBuilder, BuildError, TodoApp};
pub use config::{ConfigError, StoreConfig};
pub use domain::{
    Category, CategoryProgress, Rarity, Task, TaskBoard, TaskId, UnknownCategory,
    ValidationError, compute_progress,
};
pub use error::StoreError;
pub use store::{EditOutcome, LoadReport, LoadSource, TaskStore};
