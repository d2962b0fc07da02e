//! Yield kinds produced by settlements and players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of yield kinds a modifier can adjust.
///
/// Serialized with the game-data tag (`"YIELD_GOLD"`), so it can be used
/// directly as a JSON map key in maintenance tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum YieldType {
    #[serde(rename = "YIELD_FOOD")]
    Food,
    #[serde(rename = "YIELD_PRODUCTION")]
    Production,
    #[serde(rename = "YIELD_GOLD")]
    Gold,
    #[serde(rename = "YIELD_SCIENCE")]
    Science,
    #[serde(rename = "YIELD_CULTURE")]
    Culture,
    #[serde(rename = "YIELD_HAPPINESS")]
    Happiness,
    #[serde(rename = "YIELD_DIPLOMACY")]
    Diplomacy,
}

impl YieldType {
    /// Every yield kind, in display order.
    pub const ALL: [YieldType; 7] = [
        YieldType::Food,
        YieldType::Production,
        YieldType::Gold,
        YieldType::Science,
        YieldType::Culture,
        YieldType::Happiness,
        YieldType::Diplomacy,
    ];

    /// Game-data tag for this yield.
    pub fn as_str(self) -> &'static str {
        match self {
            YieldType::Food => "YIELD_FOOD",
            YieldType::Production => "YIELD_PRODUCTION",
            YieldType::Gold => "YIELD_GOLD",
            YieldType::Science => "YIELD_SCIENCE",
            YieldType::Culture => "YIELD_CULTURE",
            YieldType::Happiness => "YIELD_HAPPINESS",
            YieldType::Diplomacy => "YIELD_DIPLOMACY",
        }
    }

    /// Parse a game-data tag (`"YIELD_GOLD"`). Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|y| y.as_str() == s)
    }
}

impl fmt::Display for YieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(YieldType::parse("YIELD_GOLD"), Some(YieldType::Gold));
        assert_eq!(YieldType::parse(" YIELD_FOOD "), Some(YieldType::Food));
        assert_eq!(YieldType::parse("YIELD_FAITH"), None);
    }

    #[test]
    fn test_serde_uses_tags() {
        let json = serde_json::to_string(&YieldType::Happiness).unwrap();
        assert_eq!(json, "\"YIELD_HAPPINESS\"");
        let back: YieldType = serde_json::from_str("\"YIELD_SCIENCE\"").unwrap();
        assert_eq!(back, YieldType::Science);
    }
}
