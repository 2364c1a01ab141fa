//! TodoApp - UI 操作の受け口
//!
//! store の操作結果を見て、描画（Renderer）と通知（Notifier）を呼び分けます。
//! store 自体は描画も通知もしません。
//!
//! # 流れ
//! 1. store の mutator を呼ぶ（ここで保存される）
//! 2. 変化があったカテゴリを進捗付きで描き直す
//! 3. 結果に応じた Notice を出す
//!
//! 見つからない id への操作は何もしません（描画も通知もなし）。

use tracing::warn;

use super::notice;
use crate::domain::{Category, Task, TaskId};
use crate::error::StoreError;
use crate::ports::{KeyValueStorage, Notice, Notifier, Renderer};
use crate::store::{EditOutcome, TaskStore};

pub struct TodoApp<S, N, R> {
    store: TaskStore<S>,
    notifier: N,
    renderer: R,
}

impl<S, N, R> TodoApp<S, N, R>
where
    S: KeyValueStorage,
    N: Notifier,
    R: Renderer,
{
    pub fn new(store: TaskStore<S>, notifier: N, renderer: R) -> Self {
        Self {
            store,
            notifier,
            renderer,
        }
    }

    /// 起動時: 全カテゴリを描画し、sample を入れたなら通知する
    pub fn start(&mut self) {
        self.render_all();
        if self.store.load_report().seeded {
            self.notifier.notify(&Notice::success(notice::SAMPLES_ADDED));
        }
    }

    pub fn add_task(&mut self, category: Category, text: &str) -> Result<Task, StoreError> {
        match self.store.add_task(category, text) {
            Ok(task) => {
                self.render(category);
                self.notifier.notify(&Notice::success(notice::TASK_ADDED));
                Ok(task)
            }
            Err(err @ StoreError::Validation(_)) => {
                self.notifier.notify(&Notice::warning(notice::EMPTY_INPUT));
                Err(err)
            }
            Err(err) => Err(self.save_failed(err, Some(category))),
        }
    }

    pub fn toggle_task(&mut self, category: Category, id: TaskId) -> Result<Option<Task>, StoreError> {
        let toggled = self
            .store
            .toggle_task(category, id)
            .map_err(|err| self.save_failed(err, Some(category)))?;
        if let Some(task) = &toggled {
            self.render(category);
            self.notifier.notify(&notice::toggled(task.is_completed()));
        }
        Ok(toggled)
    }

    pub fn edit_task(
        &mut self,
        category: Category,
        id: TaskId,
        new_text: &str,
    ) -> Result<EditOutcome, StoreError> {
        let outcome = self
            .store
            .edit_task(category, id, new_text)
            .map_err(|err| self.save_failed(err, Some(category)))?;
        match &outcome {
            EditOutcome::Updated(_) => {
                self.render(category);
                self.notifier.notify(&Notice::success(notice::TASK_UPDATED));
            }
            // 編集モードを抜けるために描き直すだけ
            EditOutcome::NoChange => self.render(category),
            EditOutcome::NotFound => {}
        }
        Ok(outcome)
    }

    pub fn delete_task(&mut self, category: Category, id: TaskId) -> Result<bool, StoreError> {
        let removed = self
            .store
            .delete_task(category, id)
            .map_err(|err| self.save_failed(err, Some(category)))?;
        if removed {
            self.render(category);
            self.notifier.notify(&Notice::info(notice::TASK_DELETED));
        }
        Ok(removed)
    }

    /// 確認ダイアログは UI 側の責務。ここでは確定後の処理だけ行う
    pub fn delete_all_tasks(&mut self) -> Result<(), StoreError> {
        self.store
            .delete_all_tasks()
            .map_err(|err| self.save_failed(err, None))?;
        self.render_all();
        self.notifier.notify(&Notice::success(notice::ALL_DELETED));
        Ok(())
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_parts(self) -> (TaskStore<S>, N, R) {
        (self.store, self.notifier, self.renderer)
    }

    fn render(&mut self, category: Category) {
        let progress = self.store.progress(category);
        self.renderer
            .render_category(category, self.store.tasks(category), &progress);
    }

    fn render_all(&mut self) {
        for category in Category::ALL {
            self.render(category);
        }
    }

    /// 保存失敗: メモリ上は変わっているので描き直し、警告を出してエラーを返す
    fn save_failed(&mut self, err: StoreError, category: Option<Category>) -> StoreError {
        warn!(error = %err, "store operation failed");
        match category {
            Some(category) => self.render(category),
            None => self.render_all(),
        }
        self.notifier.notify(&Notice::warning(notice::SAVE_FAILED));
        err
    }
}
