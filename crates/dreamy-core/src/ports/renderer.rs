//! Renderer port - 描画 collaborator
//!
//! Renderer は store の内部に触れません。描画に必要なもの（カテゴリ、
//! タスク列、進捗）はすべて引数で受け取ります。

use crate::domain::{Category, CategoryProgress, Task};

/// Renderer はカテゴリ 1 つ分を描き直す
///
/// アニメーションやレアリティ演出は実装側の責務です。
pub trait Renderer {
    fn render_category(&mut self, category: Category, tasks: &[Task], progress: &CategoryProgress);
}
