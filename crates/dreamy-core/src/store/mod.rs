//! TaskStore - カテゴリごとのタスク列を持ち、ストレージと同期する
//!
//! # 設計原則
//! - 状態は明示的に構築した TaskStore が持つ（グローバルなシングルトンにしない）
//! - mutator は `&mut self`: 書き手は常に 1 つ
//! - 変更のたびにボード全体をスナップショットとして上書き保存する
//! - 起動時の読み込みは失敗しない（壊れたデータはデフォルトに戻す）
//!
//! # 保存失敗時
//! メモリ上の変更は残したままエラーを返します。次に保存が成功した時点で
//! 全体上書きによりストレージが追いつきます。

pub mod snapshot;

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::domain::{
    Category, CategoryProgress, SAMPLE_TASKS, Task, TaskBoard, TaskId, ValidationError,
};
use crate::error::StoreError;
use crate::ports::{Clock, IdGenerator, KeyValueStorage, MonotonicIdGenerator, SystemClock};

/// 生成した id がカテゴリ内で衝突したときに引き直す上限
const MAX_ID_DRAWS: usize = 1024;

/// Result of `edit_task`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Text replaced and persisted.
    Updated(Task),
    /// No task with that id in the category.
    NotFound,
    /// New text was empty or identical; nothing changed.
    NoChange,
}

/// Where the initial board came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Nothing stored under the tasks key.
    Empty,
    /// A valid snapshot was restored.
    Restored,
    /// Stored data was unreadable or malformed; defaults were used.
    Recovered,
}

/// What happened during `load_or_initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub source: LoadSource,
    /// Sample tasks were added (first run).
    pub seeded: bool,
    /// Tasks dropped because their id repeated inside a category.
    pub dropped_duplicates: usize,
    /// Tasks dropped because their text was empty after trimming.
    pub dropped_blank: usize,
}

pub struct TaskStore<S> {
    storage: S,
    clock: Arc<dyn Clock + Send + Sync>,
    ids: Box<dyn IdGenerator>,
    config: StoreConfig,
    board: TaskBoard,
    report: LoadReport,
}

impl<S: KeyValueStorage> TaskStore<S> {
    /// 壁時計・デフォルト設定で開く
    pub fn open(storage: S) -> Self {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(SystemClock);
        let ids = Box::new(MonotonicIdGenerator::new(Arc::clone(&clock)));
        Self::load_or_initialize(storage, clock, ids, StoreConfig::default())
    }

    /// 永続化済みの状態を読み込み、初回なら sample を追加する
    ///
    /// # フォールバック
    /// - 値がない: 空のボード
    /// - 読み込み失敗 / 形が合わない: 空のボード（warn ログのみ）
    /// - text が空（空白のみ）のタスク: 捨てる
    /// - カテゴリ内の重複 id: 最初の 1 件を残す
    pub fn load_or_initialize(
        storage: S,
        clock: Arc<dyn Clock + Send + Sync>,
        ids: Box<dyn IdGenerator>,
        config: StoreConfig,
    ) -> Self {
        let (mut board, source) = read_board(&storage, &config.tasks_key);
        let dropped_blank = board.drop_blank_texts();
        if dropped_blank > 0 {
            warn!(dropped_blank, "dropped tasks with empty text");
        }
        let dropped_duplicates = board.dedupe_ids();
        if dropped_duplicates > 0 {
            warn!(dropped_duplicates, "dropped tasks with duplicated ids");
        }

        let mut store = Self {
            storage,
            clock,
            ids,
            config,
            board,
            report: LoadReport {
                source,
                seeded: false,
                dropped_duplicates,
                dropped_blank,
            },
        };
        store.report.seeded = store.seed_samples_once();

        info!(
            source = ?store.report.source,
            seeded = store.report.seeded,
            tasks = store.board.len(),
            "task store initialized"
        );
        store
    }

    /// 初回（visited フラグなし）のみ sample を末尾に追加する
    fn seed_samples_once(&mut self) -> bool {
        if !self.config.seed_samples || self.has_visited() {
            return false;
        }

        let now = self.clock.now();
        for (category, text) in SAMPLE_TASKS {
            let id = self.fresh_id(category);
            self.board
                .tasks_mut(category)
                .push(Task::new(id, text, now));
        }

        // tasks が保存できなかったら visited も書かない（次回もう一度 seed する）
        if let Err(err) = self.persist() {
            warn!(error = %err, "failed to persist sample tasks; visited flag left unset");
            return true;
        }
        if let Err(err) = self.storage.set(&self.config.visited_key, "true") {
            warn!(error = %err, "failed to write visited flag");
        }
        true
    }

    fn has_visited(&self) -> bool {
        match self.storage.get(&self.config.visited_key) {
            Ok(flag) => flag.is_some_and(|v| !v.is_empty()),
            Err(err) => {
                // 読めないときは seed しない（二重追加を避ける）
                warn!(error = %err, "failed to read visited flag");
                true
            }
        }
    }

    /// カテゴリ内で未使用の id を取る
    fn fresh_id(&self, category: Category) -> TaskId {
        for _ in 0..MAX_ID_DRAWS {
            let id = self.ids.next_id();
            if !self.board.contains(category, id) {
                return id;
            }
        }
        let max = self
            .board
            .tasks(category)
            .iter()
            .map(|task| task.id().as_i64())
            .max()
            .unwrap_or(0);
        TaskId::new(max.saturating_add(1))
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let raw = snapshot::encode(&self.board)?;
        self.storage.set(&self.config.tasks_key, &raw)?;
        Ok(())
    }

    /// タスクを先頭に追加（newest-first）
    ///
    /// text は trim してから保存する。空なら `ValidationError::EmptyText`。
    pub fn add_task(&mut self, category: Category, text: &str) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText.into());
        }

        let task = Task::new(self.fresh_id(category), text, self.clock.now());
        self.board.tasks_mut(category).insert(0, task.clone());
        self.persist()?;

        debug!(%category, id = %task.id(), "task added");
        Ok(task)
    }

    /// 完了フラグを反転（見つからなければ `Ok(None)`、保存もしない）
    pub fn toggle_task(&mut self, category: Category, id: TaskId) -> Result<Option<Task>, StoreError> {
        let Some(task) = self.board.find_mut(category, id) else {
            debug!(%category, %id, "toggle: task not found");
            return Ok(None);
        };
        task.toggle();
        let task = task.clone();
        self.persist()?;

        debug!(%category, %id, completed = task.is_completed(), "task toggled");
        Ok(Some(task))
    }

    /// text を置き換える
    ///
    /// trim 後に空、または現在と同じなら `NoChange`（保存しない）。
    pub fn edit_task(
        &mut self,
        category: Category,
        id: TaskId,
        new_text: &str,
    ) -> Result<EditOutcome, StoreError> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(EditOutcome::NoChange);
        }
        let Some(task) = self.board.find_mut(category, id) else {
            debug!(%category, %id, "edit: task not found");
            return Ok(EditOutcome::NotFound);
        };
        if task.text() == new_text {
            return Ok(EditOutcome::NoChange);
        }

        task.set_text(new_text.to_string());
        let task = task.clone();
        self.persist()?;

        debug!(%category, %id, "task edited");
        Ok(EditOutcome::Updated(task))
    }

    /// 削除できたら `true`（保存する）、なければ `false`
    pub fn delete_task(&mut self, category: Category, id: TaskId) -> Result<bool, StoreError> {
        let tasks = self.board.tasks_mut(category);
        let Some(index) = tasks.iter().position(|task| task.id() == id) else {
            debug!(%category, %id, "delete: task not found");
            return Ok(false);
        };
        tasks.remove(index);
        self.persist()?;

        debug!(%category, %id, "task deleted");
        Ok(true)
    }

    /// 全カテゴリを空にする（中身に関係なく保存する）
    pub fn delete_all_tasks(&mut self) -> Result<(), StoreError> {
        let removed = self.board.len();
        self.board.clear();
        self.persist()?;

        debug!(removed, "all tasks deleted");
        Ok(())
    }
}

impl<S> TaskStore<S> {
    pub fn tasks(&self, category: Category) -> &[Task] {
        self.board.tasks(category)
    }

    pub fn task(&self, category: Category, id: TaskId) -> Option<&Task> {
        self.board.find(category, id)
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn progress(&self, category: Category) -> CategoryProgress {
        CategoryProgress::of(category, self.tasks(category))
    }

    /// 全カテゴリの進捗（起動時の再計算用）
    pub fn all_progress(&self) -> [CategoryProgress; 4] {
        Category::ALL.map(|category| self.progress(category))
    }

    pub fn load_report(&self) -> LoadReport {
        self.report
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_board<S: KeyValueStorage>(storage: &S, key: &str) -> (TaskBoard, LoadSource) {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (TaskBoard::new(), LoadSource::Empty),
        Err(err) => {
            warn!(key, error = %err, "failed to read stored tasks; starting empty");
            return (TaskBoard::new(), LoadSource::Recovered);
        }
    };
    match snapshot::decode(&raw) {
        Ok(board) => (board, LoadSource::Restored),
        Err(err) => {
            warn!(key, error = %err, "stored tasks are malformed; starting empty");
            (TaskBoard::new(), LoadSource::Recovered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryStorage;
    use crate::ports::FixedClock;
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 30, 0).unwrap()
    }

    fn config_without_samples() -> StoreConfig {
        StoreConfig {
            seed_samples: false,
            ..StoreConfig::default()
        }
    }

    fn open_with(storage: InMemoryStorage, config: StoreConfig) -> TaskStore<InMemoryStorage> {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::new(fixed_time()));
        let ids = Box::new(MonotonicIdGenerator::new(Arc::clone(&clock)));
        TaskStore::load_or_initialize(storage, clock, ids, config)
    }

    fn empty_store() -> TaskStore<InMemoryStorage> {
        open_with(InMemoryStorage::new(), config_without_samples())
    }

    /// 常に同じ id を返す（衝突の回避を確認する用）
    struct StuckIds;

    impl IdGenerator for StuckIds {
        fn next_id(&self) -> TaskId {
            TaskId::new(5)
        }
    }

    #[test]
    fn add_prepends_trimmed_task() {
        let mut store = empty_store();
        store.add_task(Category::Flower, "first").unwrap();
        let task = store.add_task(Category::Flower, "  buy milk  ").unwrap();

        assert_eq!(task.text(), "buy milk");
        assert!(!task.is_completed());
        assert_eq!(task.created_at(), fixed_time());
        assert_eq!(store.tasks(Category::Flower)[0].text(), "buy milk");
        assert_eq!(store.tasks(Category::Flower)[1].text(), "first");
    }

    #[test]
    fn rapid_adds_get_distinct_ids() {
        let mut store = empty_store();
        let a = store.add_task(Category::Star, "a").unwrap();
        let b = store.add_task(Category::Star, "b").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn colliding_generator_falls_back_to_next_free_id() {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::new(fixed_time()));
        let mut store = TaskStore::load_or_initialize(
            InMemoryStorage::new(),
            clock,
            Box::new(StuckIds),
            config_without_samples(),
        );

        let a = store.add_task(Category::Ribbon, "a").unwrap();
        let b = store.add_task(Category::Ribbon, "b").unwrap();

        assert_eq!(a.id(), TaskId::new(5));
        assert_eq!(b.id(), TaskId::new(6));
        // 別カテゴリでは同じ id を使ってよい
        let c = store.add_task(Category::Unicorn, "c").unwrap();
        assert_eq!(c.id(), TaskId::new(5));
    }

    #[test]
    fn empty_text_is_rejected_without_writing() {
        let mut store = empty_store();
        for text in ["", "   ", "\n\t"] {
            let err = store.add_task(Category::Flower, text).unwrap_err();
            assert!(matches!(err, StoreError::Validation(ValidationError::EmptyText)));
        }
        assert!(store.board().is_empty());
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn toggle_unknown_id_is_silent_noop() {
        let mut store = empty_store();
        assert_eq!(store.toggle_task(Category::Star, TaskId::new(1)).unwrap(), None);
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn edit_outcomes() {
        let mut store = empty_store();
        let task = store.add_task(Category::Ribbon, "友達に連絡する").unwrap();
        let writes = store.storage().writes();

        assert_eq!(
            store.edit_task(Category::Ribbon, task.id(), " 友達に連絡する ").unwrap(),
            EditOutcome::NoChange
        );
        assert_eq!(
            store.edit_task(Category::Ribbon, task.id(), "  ").unwrap(),
            EditOutcome::NoChange
        );
        assert_eq!(
            store.edit_task(Category::Flower, task.id(), "other").unwrap(),
            EditOutcome::NotFound
        );
        assert_eq!(store.storage().writes(), writes);

        let EditOutcome::Updated(edited) =
            store.edit_task(Category::Ribbon, task.id(), "家族に電話する").unwrap()
        else {
            panic!("expected Updated");
        };
        assert_eq!(edited.text(), "家族に電話する");
        assert_eq!(edited.created_at(), task.created_at());
        assert_eq!(edited.id(), task.id());
        assert_eq!(store.storage().writes(), writes + 1);
    }

    #[test]
    fn delete_reports_whether_removed() {
        let mut store = empty_store();
        let task = store.add_task(Category::Unicorn, "x").unwrap();

        assert!(!store.delete_task(Category::Flower, task.id()).unwrap());
        assert!(store.delete_task(Category::Unicorn, task.id()).unwrap());
        assert!(!store.delete_task(Category::Unicorn, task.id()).unwrap());
        assert!(store.tasks(Category::Unicorn).is_empty());
    }

    #[test]
    fn delete_all_persists_even_when_empty() {
        let mut store = empty_store();
        store.delete_all_tasks().unwrap();
        assert_eq!(store.storage().writes(), 1);
    }

    #[test]
    fn progress_follows_toggles() {
        let mut store = empty_store();
        let a = store.add_task(Category::Star, "a").unwrap();
        store.add_task(Category::Star, "b").unwrap();
        store.add_task(Category::Star, "c").unwrap();

        store.toggle_task(Category::Star, a.id()).unwrap();
        let progress = store.progress(Category::Star);
        assert_eq!(progress.percentage, 33);

        let all = store.all_progress();
        assert_eq!(all.map(|p| p.category), Category::ALL);
        assert_eq!(all[0].percentage, 0);
    }

    #[test]
    fn unreadable_visited_flag_skips_seeding() {
        struct BrokenFlag(InMemoryStorage);

        impl KeyValueStorage for BrokenFlag {
            fn get(&self, key: &str) -> Result<Option<String>, crate::ports::StorageError> {
                if key == "dreamyTodoVisited" {
                    return Err(crate::ports::StorageError::InvalidKey(key.to_string()));
                }
                self.0.get(key)
            }

            fn set(&mut self, key: &str, value: &str) -> Result<(), crate::ports::StorageError> {
                self.0.set(key, value)
            }
        }

        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::new(fixed_time()));
        let ids = Box::new(MonotonicIdGenerator::new(Arc::clone(&clock)));
        let store = TaskStore::load_or_initialize(
            BrokenFlag(InMemoryStorage::new()),
            clock,
            ids,
            StoreConfig::default(),
        );

        assert!(!store.load_report().seeded);
        assert!(store.board().is_empty());
    }

    #[test]
    fn failed_sample_write_leaves_visited_unset_for_next_run() {
        /// tasks key への最初の書き込みだけ失敗する
        struct FailFirstTasksWrite {
            inner: InMemoryStorage,
            failed: bool,
        }

        impl KeyValueStorage for FailFirstTasksWrite {
            fn get(&self, key: &str) -> Result<Option<String>, crate::ports::StorageError> {
                self.inner.get(key)
            }

            fn set(&mut self, key: &str, value: &str) -> Result<(), crate::ports::StorageError> {
                if key == "dreamyTodoTasks" && !self.failed {
                    self.failed = true;
                    return Err(crate::ports::StorageError::Io {
                        key: key.to_string(),
                        source: std::io::Error::other("disk full"),
                    });
                }
                self.inner.set(key, value)
            }
        }

        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock::new(fixed_time()));
        let ids = Box::new(MonotonicIdGenerator::new(Arc::clone(&clock)));
        let first = TaskStore::load_or_initialize(
            FailFirstTasksWrite {
                inner: InMemoryStorage::new(),
                failed: false,
            },
            clock,
            ids,
            StoreConfig::default(),
        );
        assert!(first.load_report().seeded);
        assert_eq!(first.board().len(), 6);

        let storage = first.into_storage();
        assert_eq!(storage.get("dreamyTodoVisited").unwrap(), None);
        assert_eq!(storage.get("dreamyTodoTasks").unwrap(), None);

        let second = open_with(storage.inner, StoreConfig::default());
        assert!(second.load_report().seeded);
        assert_eq!(second.board().len(), 6);
        assert_eq!(
            second.storage().get("dreamyTodoVisited").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn blank_stored_tasks_are_dropped_on_load() {
        let raw = r#"{"flower":[
            {"id":1,"text":"  ","completed":false,"createdAt":"2025-01-01T00:00:00.000Z"},
            {"id":2,"text":"keep","completed":true,"createdAt":"2025-01-01T00:00:00.000Z"}
        ],"star":[{"id":3,"text":"","completed":false,"createdAt":"2025-01-01T00:00:00.000Z"}],
        "ribbon":[],"unicorn":[]}"#;
        let store = open_with(
            InMemoryStorage::with_entries([("dreamyTodoTasks", raw)]),
            config_without_samples(),
        );

        assert_eq!(store.load_report().dropped_blank, 2);
        assert_eq!(store.load_report().source, LoadSource::Restored);
        assert_eq!(store.tasks(Category::Flower).len(), 1);
        assert_eq!(store.tasks(Category::Flower)[0].text(), "keep");
        assert!(store.tasks(Category::Star).is_empty());
    }
}
