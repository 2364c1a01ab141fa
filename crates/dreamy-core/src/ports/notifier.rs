//! Notifier port - トースト通知
//!
//! UI 操作の結果をユーザーに知らせる collaborator です。
//! store 自体は通知しません。app 層が操作結果から Notice を作って渡します。

/// 通知の種類（トーストの見た目を決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Warning,
    Info,
}

/// 1 件の通知メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }
}

/// Notifier は Notice を表示する
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}
