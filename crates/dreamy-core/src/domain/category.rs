//! Category - 固定の 4 カテゴリ
//!
//! カテゴリはユーザーが追加・変更できない閉じた集合です。
//! 永続化 JSON のキーとしても使うため、識別子は小文字で固定します。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::UnknownCategory;

/// Task category (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Flower,
    Star,
    Ribbon,
    Unicorn,
}

impl Category {
    /// 全カテゴリ（表示順・永続化順）
    pub const ALL: [Category; 4] = [
        Category::Flower,
        Category::Star,
        Category::Ribbon,
        Category::Unicorn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Flower => "flower",
            Category::Star => "star",
            Category::Ribbon => "ribbon",
            Category::Unicorn => "unicorn",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
