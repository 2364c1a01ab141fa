//! Task - テキスト + 完了フラグ
//!
//! # 不変条件
//! - `id` と `created_at` は作成後に変わらない
//! - 変更できるのは `text` と `completed` だけ（store 経由）
//! - `created_at` はミリ秒精度に丸める（永続化フォーマットと同じ精度）

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;

/// One task item.
///
/// Serialized shape: `{"id":1,"text":"...","completed":false,"createdAt":"...Z"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    #[serde(with = "iso_millis")]
    created_at: DateTime<Utc>,
}

impl Task {
    /// 未完了の Task を作成
    ///
    /// text の検証（空文字チェック・trim）は呼び出し側（store）の責務です。
    pub fn new(id: TaskId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: created_at.trunc_subsecs(3),
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 完了フラグを反転し、新しい値を返す
    pub(crate) fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

/// `Date.prototype.toISOString()` と同じ形式（ミリ秒 3 桁 + `Z`）で読み書きする
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(serde::de::Error::custom)
    }
}
