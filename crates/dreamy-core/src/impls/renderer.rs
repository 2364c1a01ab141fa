//! Renderer 実装
//!
//! 実際の画面描画は UI 側にあります。ここにはヘッドレス用のものだけ置きます。

use tracing::debug;

use crate::domain::{Category, CategoryProgress, Task};
use crate::ports::Renderer;

/// 描画内容を debug ログに出す
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRenderer;

impl Renderer for TracingRenderer {
    fn render_category(&mut self, category: Category, tasks: &[Task], progress: &CategoryProgress) {
        debug!(
            %category,
            tasks = tasks.len(),
            completed = progress.completed,
            percentage = progress.percentage,
            rarity = progress.rarity.as_str(),
            "render category"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render_category(&mut self, _: Category, _: &[Task], _: &CategoryProgress) {}
}
