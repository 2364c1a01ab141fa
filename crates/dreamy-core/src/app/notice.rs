//! UI 操作ごとの通知メッセージ

use crate::ports::Notice;

pub const SAMPLES_ADDED: &str = "サンプルタスクを追加しました！✨";
pub const TASK_ADDED: &str = "タスクを追加しました ✨";
pub const EMPTY_INPUT: &str = "タスクを入力してください ✨";
pub const TASK_COMPLETED: &str = "完了しました！🎉";
pub const TASK_REOPENED: &str = "未完了に戻しました ✨";
pub const TASK_UPDATED: &str = "タスクを更新しました ✨";
pub const TASK_DELETED: &str = "タスクを削除しました ✨";
pub const ALL_DELETED: &str = "すべてのタスクを削除しました ✨";
pub const SAVE_FAILED: &str = "保存に失敗しました";

/// toggle 後の状態に応じた通知（完了 → success、未完了に戻す → info）
pub fn toggled(completed: bool) -> Notice {
    if completed {
        Notice::success(TASK_COMPLETED)
    } else {
        Notice::info(TASK_REOPENED)
    }
}
