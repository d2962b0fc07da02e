//! Read-only snapshot of the host game state.
//!
//! The engine never owns or mutates host state. Capability sub-records are
//! optional: a player without diplomacy, a city without workers. Queriers
//! treat an absent capability as its neutral value (0 / false / empty).

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

pub type HashMap<K, V> = FxHashMap<K, V>;
pub type HashSet<T> = FxHashSet<T>;

pub type PlayerId = u32;
pub type CityId = u32;
pub type UnitId = u32;
pub type PlotId = u32;

/// Active traditions slotted in the player's government.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CultureState {
    pub active_traditions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiplomacyState {
    #[serde(default)]
    pub allies: HashSet<PlayerId>,
    /// Relationship tag towards other players ("DIPLOMACY_RELATIONSHIP_FRIENDLY").
    #[serde(default)]
    pub relationships: HashMap<PlayerId, String>,
    #[serde(default)]
    pub at_war_with: HashSet<PlayerId>,
    /// Government ideology; `None` before one is adopted.
    #[serde(default)]
    pub ideology: Option<String>,
}

impl DiplomacyState {
    pub fn has_allied(&self, other: PlayerId) -> bool {
        self.allies.contains(&other)
    }

    pub fn is_at_war_with(&self, other: PlayerId) -> bool {
        self.at_war_with.contains(&other)
    }

    pub fn relationship(&self, other: PlayerId) -> Option<&str> {
        self.relationships.get(&other).map(String::as_str)
    }
}

/// Attribute trees (leader progression).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityState {
    /// Spent points by attribute type ("ATTRIBUTE_ECONOMIC").
    pub spent_attribute_points: HashMap<String, u32>,
}

impl IdentityState {
    pub fn spent_attribute_points(&self, attribute: &str) -> u32 {
        self.spent_attribute_points
            .get(attribute)
            .copied()
            .unwrap_or(0)
    }
}

/// Resources assigned to the empire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesState {
    pub assigned: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRoute {
    /// Settlement the route starts from.
    pub city: CityId,
    pub partner: PlayerId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeState {
    pub routes: Vec<TradeRoute>,
}

/// City-state influence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfluenceState {
    pub suzerain: Option<PlayerId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    #[serde(default = "default_true")]
    pub alive: bool,
    /// Major civilizations; city-states are minors.
    #[serde(default)]
    pub is_major: bool,
    #[serde(default)]
    pub cities: Vec<CityId>,
    #[serde(default)]
    pub units: Vec<UnitId>,
    #[serde(default)]
    pub culture: Option<CultureState>,
    #[serde(default)]
    pub diplomacy: Option<DiplomacyState>,
    #[serde(default)]
    pub identity: Option<IdentityState>,
    #[serde(default)]
    pub resources: Option<ResourcesState>,
    #[serde(default)]
    pub trade: Option<TradeState>,
    #[serde(default)]
    pub influence: Option<InfluenceState>,
}

fn default_true() -> bool {
    true
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            id: 0,
            alive: true,
            is_major: false,
            cities: Vec::new(),
            units: Vec::new(),
            culture: None,
            diplomacy: None,
            identity: None,
            resources: None,
            trade: None,
            influence: None,
        }
    }
}

impl PlayerState {
    pub fn is_minor(&self) -> bool {
        !self.is_major
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WorkersState {
    pub specialists: u32,
    pub workers: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityState {
    pub id: CityId,
    pub owner: PlayerId,
    #[serde(default)]
    pub is_town: bool,
    #[serde(default)]
    pub population: u32,
    /// Plots inside the settlement's borders.
    #[serde(default)]
    pub plots: Vec<PlotId>,
    #[serde(default)]
    pub workers: Option<WorkersState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitState {
    pub id: UnitId,
    pub owner: PlayerId,
    pub unit_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlotState {
    pub id: PlotId,
    #[serde(default)]
    pub owner: Option<PlayerId>,
    #[serde(default)]
    pub city: Option<CityId>,
    #[serde(default)]
    pub terrain: String,
    #[serde(default)]
    pub feature: Option<String>,
    #[serde(default)]
    pub river: bool,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    /// Constructible types standing on this plot.
    #[serde(default)]
    pub constructibles: Vec<String>,
    #[serde(default)]
    pub neighbors: Vec<PlotId>,
}

/// Everything the engine may query about the host game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default)]
    pub players: HashMap<PlayerId, PlayerState>,
    #[serde(default)]
    pub cities: HashMap<CityId, CityState>,
    #[serde(default)]
    pub units: HashMap<UnitId, UnitState>,
    #[serde(default)]
    pub plots: HashMap<PlotId, PlotState>,
}

impl GameSnapshot {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.get(&id)
    }

    pub fn city(&self, id: CityId) -> Option<&CityState> {
        self.cities.get(&id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&UnitState> {
        self.units.get(&id)
    }

    pub fn plot(&self, id: PlotId) -> Option<&PlotState> {
        self.plots.get(&id)
    }

    /// Alive players in id order, so that sweeps are deterministic.
    pub fn alive_players(&self) -> Vec<&PlayerState> {
        let mut players: Vec<_> = self.players.values().filter(|p| p.alive).collect();
        players.sort_by_key(|p| p.id);
        players
    }

    /// Plots of a city that exist in the snapshot.
    pub fn city_plots<'a>(&'a self, city: &'a CityState) -> impl Iterator<Item = &'a PlotState> {
        city.plots.iter().filter_map(move |id| self.plots.get(id))
    }
}
