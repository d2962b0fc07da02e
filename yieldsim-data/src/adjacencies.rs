//! Adjacency yield definitions.
//!
//! An adjacency grants `yield_change` of `yield_type` to a constructible for
//! every `tiles_required` neighbouring plots that satisfy its criteria.
//! Criteria are conjunctive: a neighbour must satisfy every one that is set.

use crate::yields::YieldType;
use serde::{Deserialize, Serialize};

fn default_tiles_required() -> u32 {
    1
}

/// One row of the adjacency yield table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyDef {
    /// Adjacency key: "QuarterScience", "MountainScience", ...
    pub id: String,
    pub yield_type: YieldType,
    pub yield_change: f32,
    /// Neighbours needed per application of `yield_change`.
    #[serde(default = "default_tiles_required")]
    pub tiles_required: u32,
    #[serde(default)]
    pub adjacent_terrain: Option<String>,
    #[serde(default)]
    pub adjacent_feature: Option<String>,
    #[serde(default)]
    pub adjacent_river: bool,
    #[serde(default)]
    pub adjacent_resource: bool,
    #[serde(default)]
    pub adjacent_wonder: bool,
    #[serde(default)]
    pub adjacent_district: Option<String>,
    #[serde(default)]
    pub adjacent_constructible_tag: Option<String>,
}

impl AdjacencyDef {
    /// Minimal definition with no criteria (every neighbour matches).
    pub fn new(id: impl Into<String>, yield_type: YieldType, yield_change: f32) -> Self {
        Self {
            id: id.into(),
            yield_type,
            yield_change,
            tiles_required: 1,
            adjacent_terrain: None,
            adjacent_feature: None,
            adjacent_river: false,
            adjacent_resource: false,
            adjacent_wonder: false,
            adjacent_district: None,
            adjacent_constructible_tag: None,
        }
    }
}
