//! First-run sample tasks.

use super::category::Category;

/// 初回起動時に追加するサンプル（この順で各カテゴリの末尾に追加される）
pub const SAMPLE_TASKS: [(Category, &str); 6] = [
    (Category::Flower, "机の上を片付ける"),
    (Category::Flower, "植物に水をやる"),
    (Category::Star, "新しいレシピに挑戦する"),
    (Category::Star, "お気に入りの音楽を聴く"),
    (Category::Ribbon, "友達に連絡する"),
    (Category::Unicorn, "新しい言語を学び始める"),
];
