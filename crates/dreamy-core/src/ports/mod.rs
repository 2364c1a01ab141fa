//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部の collaborator（ストレージ、時計、通知、描画）への
//! インターフェースを提供し、実装の詳細を隠蔽します。

pub mod clock;
pub mod id_generator;
pub mod notifier;
pub mod renderer;
pub mod storage;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, MonotonicIdGenerator};
pub use self::notifier::{Notice, NoticeLevel, Notifier};
pub use self::renderer::Renderer;
pub use self::storage::{KeyValueStorage, StorageError};
