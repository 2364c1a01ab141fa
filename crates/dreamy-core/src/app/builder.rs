//! AppBuilder - ストレージ・時計・ID 生成器・設定のワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::impls::{FileStorage, file_storage};
use crate::ports::{
    Clock, IdGenerator, KeyValueStorage, MonotonicIdGenerator, Notifier, Renderer, SystemClock,
};
use crate::store::TaskStore;

use super::TodoApp;

/// AppBuilder は TaskStore / TodoApp を構築
///
/// # 使用例
/// ```ignore
/// let mut app = AppBuilder::new(InMemoryStorage::new())
///     .clock(FixedClock::new(at))
///     .build(TracingNotifier, TracingRenderer)?;
/// app.start();
/// ```
///
/// # Fail-fast 設計
/// - build 時に設定の key をチェック（空、または 2 つの key が同じならエラー）
/// - `from_config` ではさらに key がファイル名として使えるかを確認する
/// - 読み込み自体は失敗しない（壊れたデータはデフォルトに戻る）
pub struct AppBuilder<S> {
    storage: S,
    config: StoreConfig,
    clock: Option<Arc<dyn Clock + Send + Sync>>,
    ids: Option<Box<dyn IdGenerator>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("storage key `{0}` must not be empty")]
    EmptyKey(&'static str),

    #[error("tasks_key and visited_key must differ (both are `{0}`)")]
    KeyConflict(String),

    #[error("storage key `{0}` cannot be used as a file name")]
    InvalidFileKey(String),

    #[error("storage_dir is not set in the config")]
    MissingStorageDir,
}

impl<S: KeyValueStorage> AppBuilder<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: StoreConfig::default(),
            clock: None,
            ids: None,
        }
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// 時計を差し替える（ID 生成器を指定しなければ、それもこの時計を使う）
    pub fn clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    /// 設定を検証して TaskStore を読み込む
    pub fn build_store(self) -> Result<TaskStore<S>, BuildError> {
        validate(&self.config)?;
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock) as Arc<dyn Clock + Send + Sync>);
        let ids: Box<dyn IdGenerator> = match self.ids {
            Some(ids) => ids,
            None => Box::new(MonotonicIdGenerator::new(Arc::clone(&clock))),
        };
        Ok(TaskStore::load_or_initialize(
            self.storage,
            clock,
            ids,
            self.config,
        ))
    }

    pub fn build<N: Notifier, R: Renderer>(
        self,
        notifier: N,
        renderer: R,
    ) -> Result<TodoApp<S, N, R>, BuildError> {
        let store = self.build_store()?;
        Ok(TodoApp::new(store, notifier, renderer))
    }
}

impl AppBuilder<FileStorage> {
    /// `config.storage_dir` の FileStorage を使う
    pub fn from_config(config: StoreConfig) -> Result<Self, BuildError> {
        for key in [&config.tasks_key, &config.visited_key] {
            file_storage::validate_key(key)
                .map_err(|_| BuildError::InvalidFileKey(key.clone()))?;
        }
        let dir = config
            .storage_dir
            .clone()
            .ok_or(BuildError::MissingStorageDir)?;
        Ok(AppBuilder::new(FileStorage::new(dir)).config(config))
    }
}

fn validate(config: &StoreConfig) -> Result<(), BuildError> {
    if config.tasks_key.is_empty() {
        return Err(BuildError::EmptyKey("tasks_key"));
    }
    if config.visited_key.is_empty() {
        return Err(BuildError::EmptyKey("visited_key"));
    }
    if config.tasks_key == config.visited_key {
        return Err(BuildError::KeyConflict(config.tasks_key.clone()));
    }
    Ok(())
}
