//! Progress calculator: completion percentage and rarity tier.
//!
//! Pure functions only. The store calls these after every mutation that can
//! change a category's completion state, and once per category at startup.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::task::Task;

/// Completion percentage in `[0, 100]`.
///
/// `0` for an empty list, otherwise `round(100 * completed / total)` with
/// round-half-up, computed in integers so `.5` boundaries are exact.
pub fn compute_progress(tasks: &[Task]) -> u8 {
    let total = tasks.len();
    if total == 0 {
        return 0;
    }
    let completed = tasks.iter().filter(|task| task.is_completed()).count();
    let percentage = (200 * completed + total) / (2 * total);
    // completed <= total なので 100 を超えない
    percentage.min(100) as u8
}

/// Display-only tier derived from a completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// | percentage | tier |
    /// |---|---|
    /// | 0 | common |
    /// | 1–24 | uncommon |
    /// | 25–49 | rare |
    /// | 50–74 | epic |
    /// | 75–99 | legendary |
    /// | 100 | mythic |
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            0 => Rarity::Common,
            1..=24 => Rarity::Uncommon,
            25..=49 => Rarity::Rare,
            50..=74 => Rarity::Epic,
            75..=99 => Rarity::Legendary,
            _ => Rarity::Mythic,
        }
    }

    /// Lowercase identifier (`rarity-<tier>` style class suffix).
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Mythic => "mythic",
        }
    }

    /// Badge text.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recomputed progress of one category, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProgress {
    pub category: Category,
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
    pub rarity: Rarity,
}

impl CategoryProgress {
    pub fn of(category: Category, tasks: &[Task]) -> Self {
        let percentage = compute_progress(tasks);
        Self {
            category,
            total: tasks.len(),
            completed: tasks.iter().filter(|task| task.is_completed()).count(),
            percentage,
            rarity: Rarity::from_percentage(percentage),
        }
    }
}
