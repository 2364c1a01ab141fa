//! Snapshot codec - TaskBoard ⇔ 永続化 JSON
//!
//! ```text
//! {"flower":[{"id":1,"text":"...","completed":false,"createdAt":"2025-01-01T09:30:00.000Z"}],
//!  "star":[],"ribbon":[],"unicorn":[]}
//! ```
//!
//! 形が合わないデータ（キー欠落、型違い、`null` など）は decode エラーになります。
//! それをどう扱うか（デフォルトに戻す）は store 側が決めます。

use crate::domain::TaskBoard;

pub fn encode(board: &TaskBoard) -> Result<String, serde_json::Error> {
    serde_json::to_string(board)
}

pub fn decode(raw: &str) -> Result<TaskBoard, serde_json::Error> {
    serde_json::from_str(raw)
}
