//! Notifier 実装
//!
//! - TracingNotifier: 通知を tracing のイベントとして出す（ヘッドレス環境向け）
//! - NoopNotifier: 何もしない

use tracing::{info, warn};

use crate::ports::{Notice, NoticeLevel, Notifier};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Warning => warn!(text = %notice.message, "notice"),
            NoticeLevel::Success | NoticeLevel::Info => {
                info!(kind = ?notice.level, text = %notice.message, "notice")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&mut self, _notice: &Notice) {}
}
