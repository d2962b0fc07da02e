//! Constructible (building, improvement, wonder) definitions.

use crate::yields::YieldType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Constructible category, matched by the `ConstructibleClass` modifier argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConstructibleClass {
    #[default]
    #[serde(rename = "BUILDING")]
    Building,
    #[serde(rename = "IMPROVEMENT")]
    Improvement,
    #[serde(rename = "WONDER")]
    Wonder,
}

impl ConstructibleClass {
    /// Parse from game data ("BUILDING", "IMPROVEMENT", "WONDER").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BUILDING" => Some(Self::Building),
            "IMPROVEMENT" => Some(Self::Improvement),
            "WONDER" => Some(Self::Wonder),
            _ => None,
        }
    }
}

/// Static definition of a constructible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstructibleDef {
    /// Type key: "BUILDING_MARKET", "IMPROVEMENT_FARM", etc.
    pub constructible_type: String,
    #[serde(default)]
    pub class: ConstructibleClass,
    /// Free-form tags ("SCIENCE", "AGELESS", ...).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Upkeep per turn by yield (positive numbers are costs).
    #[serde(default)]
    pub maintenance: BTreeMap<YieldType, f32>,
    /// Adjacency ids this constructible can receive.
    #[serde(default)]
    pub adjacencies: Vec<String>,
}

impl ConstructibleDef {
    pub fn new(constructible_type: impl Into<String>, class: ConstructibleClass) -> Self {
        Self {
            constructible_type: constructible_type.into(),
            class,
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_maintenance(mut self, yield_type: YieldType, cost: f32) -> Self {
        self.maintenance.insert(yield_type, cost);
        self
    }

    pub fn with_adjacency(mut self, adjacency_id: &str) -> Self {
        self.adjacencies.push(adjacency_id.to_string());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Maintenance cost for one yield, zero when not listed.
    pub fn maintenance_for(&self, yield_type: YieldType) -> f32 {
        self.maintenance.get(&yield_type).copied().unwrap_or(0.0)
    }

    pub fn has_adjacency(&self, adjacency_id: &str) -> bool {
        self.adjacencies.iter().any(|a| a == adjacency_id)
    }
}
