//! Unit type definitions.

use serde::{Deserialize, Serialize};

/// Static definition of a unit type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitDef {
    /// Type key: "UNIT_ARMY_COMMANDER", "UNIT_LEGION", ...
    pub unit_type: String,
    /// Core class: "CORE_CLASS_MILITARY", "CORE_CLASS_CIVILIAN", ...
    #[serde(default)]
    pub core_class: String,
    /// Domain: "DOMAIN_LAND", "DOMAIN_SEA", "DOMAIN_AIR".
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Gold upkeep per unit per turn.
    #[serde(default)]
    pub maintenance: f32,
}

impl UnitDef {
    pub fn new(unit_type: impl Into<String>, core_class: impl Into<String>, maintenance: f32) -> Self {
        Self {
            unit_type: unit_type.into(),
            core_class: core_class.into(),
            domain: "DOMAIN_LAND".to_string(),
            tags: Vec::new(),
            maintenance,
        }
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain = domain.to_string();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
