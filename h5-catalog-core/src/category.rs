use serde::{Deserialize, Serialize};

/// Catalog categories for bundled mini-games.
///
/// The set is closed: every record carries exactly one of these six labels.
/// Labels are serialized in their Chinese display form, which is what the
/// front-end filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "动作")]
    Action,
    #[serde(rename = "益智")]
    Puzzle,
    #[serde(rename = "休闲")]
    Casual,
    #[serde(rename = "射击")]
    Shooter,
    #[serde(rename = "策略")]
    Strategy,
    #[serde(rename = "冒险")]
    Adventure,
}

/// All categories in draw order.
const ALL_CATEGORIES: &[Category] = &[
    Category::Action,
    Category::Puzzle,
    Category::Casual,
    Category::Shooter,
    Category::Strategy,
    Category::Adventure,
];

/// Description used for any label outside the known set.
pub const GENERIC_DESCRIPTION: &str = "这是一款有趣的小游戏，快来体验吧！";

impl Category {
    /// The label written to the catalog.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Action => "动作",
            Self::Puzzle => "益智",
            Self::Casual => "休闲",
            Self::Shooter => "射击",
            Self::Strategy => "策略",
            Self::Adventure => "冒险",
        }
    }

    /// Template description shown on the game card.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Action => "这是一款刺激的动作游戏，操作简单但富有挑战性，快来体验吧！",
            Self::Puzzle => "这款益智游戏能够锻炼你的思维能力，多种关卡等你来挑战！",
            Self::Casual => "轻松愉快的休闲游戏，适合在碎片时间玩耍，放松心情！",
            Self::Shooter => "紧张刺激的射击游戏，精准的操作和反应速度是获胜的关键！",
            Self::Strategy => "考验你策略思维的游戏，合理规划才能取得胜利！",
            Self::Adventure => "踏上奇幻冒险之旅，探索未知的世界，解锁更多精彩内容！",
        }
    }

    /// Returns a slice of all categories.
    pub fn all() -> &'static [Category] {
        ALL_CATEGORIES
    }
}

/// Look up the description for a raw category label.
///
/// Total over all strings: unknown labels get [`GENERIC_DESCRIPTION`].
pub fn description_for(label: &str) -> &'static str {
    label
        .parse::<Category>()
        .map(|c| c.description())
        .unwrap_or(GENERIC_DESCRIPTION)
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not one of the category labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl std::fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category: '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/category_tests.rs"]
mod tests;
