//! TaskBoard - カテゴリ → タスク列のマッピング
//!
//! # 不変条件
//! - 4 カテゴリすべてのキーが常に存在する（カテゴリごとにフィールドを持つので型で保証）
//! - 同じカテゴリ内で id は重複しない
//! - 列の順序は意味を持つ（手動追加は先頭に入る = newest-first）

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::TaskId;
use super::task::Task;

/// In-memory board state; also the exact shape of the persisted snapshot.
///
/// All four keys are required when deserializing: a snapshot missing one of
/// them does not match the expected shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBoard {
    flower: Vec<Task>,
    star: Vec<Task>,
    ribbon: Vec<Task>,
    unicorn: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, category: Category) -> &[Task] {
        match category {
            Category::Flower => &self.flower,
            Category::Star => &self.star,
            Category::Ribbon => &self.ribbon,
            Category::Unicorn => &self.unicorn,
        }
    }

    pub(crate) fn tasks_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::Flower => &mut self.flower,
            Category::Star => &mut self.star,
            Category::Ribbon => &mut self.ribbon,
            Category::Unicorn => &mut self.unicorn,
        }
    }

    pub fn find(&self, category: Category, id: TaskId) -> Option<&Task> {
        self.tasks(category).iter().find(|task| task.id() == id)
    }

    pub(crate) fn find_mut(&mut self, category: Category, id: TaskId) -> Option<&mut Task> {
        self.tasks_mut(category).iter_mut().find(|task| task.id() == id)
    }

    pub fn contains(&self, category: Category, id: TaskId) -> bool {
        self.find(category, id).is_some()
    }

    /// 全カテゴリのタスク数の合計
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.tasks(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 全カテゴリを空にする
    pub(crate) fn clear(&mut self) {
        for category in Category::ALL {
            self.tasks_mut(category).clear();
        }
    }

    /// trim 後に空になる text のタスクを取り除く
    ///
    /// 取り除いた件数を返す。
    pub(crate) fn drop_blank_texts(&mut self) -> usize {
        let mut removed = 0;
        for category in Category::ALL {
            let tasks = self.tasks_mut(category);
            let before = tasks.len();
            tasks.retain(|task| !task.text().trim().is_empty());
            removed += before - tasks.len();
        }
        removed
    }

    /// カテゴリ内の重複 id を取り除く（最初の出現を残す）
    ///
    /// 取り除いた件数を返す。
    pub(crate) fn dedupe_ids(&mut self) -> usize {
        let mut removed = 0;
        for category in Category::ALL {
            let tasks = self.tasks_mut(category);
            let before = tasks.len();
            let mut seen = HashSet::new();
            tasks.retain(|task| seen.insert(task.id()));
            removed += before - tasks.len();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: i64, text: &str) -> Task {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Task::new(TaskId::new(id), text, at)
    }

    #[test]
    fn default_board_has_every_category_empty() {
        let board = TaskBoard::new();
        for category in Category::ALL {
            assert!(board.tasks(category).is_empty());
        }
        assert!(board.is_empty());
    }

    #[test]
    fn serializes_all_keys_in_fixed_order() {
        let s = serde_json::to_string(&TaskBoard::new()).unwrap();
        assert_eq!(s, r#"{"flower":[],"star":[],"ribbon":[],"unicorn":[]}"#);
    }

    #[test]
    fn missing_category_key_is_rejected() {
        let raw = r#"{"flower":[],"star":[],"ribbon":[]}"#;
        assert!(serde_json::from_str::<TaskBoard>(raw).is_err());
    }

    #[test]
    fn find_is_scoped_per_category() {
        let mut board = TaskBoard::new();
        board.tasks_mut(Category::Star).push(task(1, "a"));

        assert!(board.contains(Category::Star, TaskId::new(1)));
        assert!(!board.contains(Category::Flower, TaskId::new(1)));
    }

    #[test]
    fn drop_blank_texts_counts_removed() {
        let mut board = TaskBoard::new();
        board.tasks_mut(Category::Star).extend([task(1, " \t"), task(2, "x"), task(3, "")]);

        assert_eq!(board.drop_blank_texts(), 2);
        assert_eq!(board.tasks(Category::Star).len(), 1);
        assert_eq!(board.drop_blank_texts(), 0);
    }

    #[test]
    fn dedupe_keeps_first_occurrence_per_category() {
        let mut board = TaskBoard::new();
        board.tasks_mut(Category::Flower).extend([task(1, "first"), task(1, "second"), task(2, "x")]);
        // カテゴリをまたいだ重複はそのまま
        board.tasks_mut(Category::Ribbon).push(task(1, "other"));

        assert_eq!(board.dedupe_ids(), 1);

        let flower = board.tasks(Category::Flower);
        assert_eq!(flower.len(), 2);
        assert_eq!(flower[0].text(), "first");
        assert_eq!(board.tasks(Category::Ribbon).len(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let mut board = TaskBoard::new();
        for (i, category) in Category::ALL.into_iter().enumerate() {
            board.tasks_mut(category).push(task(i as i64, "t"));
        }
        assert_eq!(board.len(), 4);

        board.clear();
        assert!(board.is_empty());
    }
}
