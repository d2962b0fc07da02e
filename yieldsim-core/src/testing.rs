use crate::config::ResolverConfig;
use crate::context::{EvalContext, SubjectScope, SubjectTable};
use crate::resolve::YieldResolver;
use crate::state::{
    CityId, CityState, GameSnapshot, PlayerId, PlayerState, PlotId, PlotState, UnitId, UnitState,
};
use yieldsim_data::{
    AdjacencyDef, ConstructibleClass, ConstructibleDef, GameData, Modifier, ModifierRegistry,
    UnitDef,
};

pub struct SnapshotBuilder {
    state: GameSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            state: GameSnapshot::default(),
        }
    }

    /// Alive major civilization with no capabilities.
    pub fn with_player(mut self, id: PlayerId) -> Self {
        self.state.players.insert(
            id,
            PlayerState {
                id,
                is_major: true,
                ..Default::default()
            },
        );
        self
    }

    /// Alive city-state.
    pub fn with_minor(mut self, id: PlayerId) -> Self {
        self.state.players.insert(
            id,
            PlayerState {
                id,
                is_major: false,
                ..Default::default()
            },
        );
        self
    }

    pub fn with_city(self, id: CityId, owner: PlayerId) -> Self {
        self.with_settlement(id, owner, false)
    }

    pub fn with_town(self, id: CityId, owner: PlayerId) -> Self {
        self.with_settlement(id, owner, true)
    }

    fn with_settlement(mut self, id: CityId, owner: PlayerId, is_town: bool) -> Self {
        self.state.cities.insert(
            id,
            CityState {
                id,
                owner,
                is_town,
                population: 1,
                ..Default::default()
            },
        );
        if let Some(player) = self.state.players.get_mut(&owner) {
            player.cities.push(id);
        }
        self
    }

    pub fn with_unit(mut self, id: UnitId, owner: PlayerId, unit_type: &str) -> Self {
        self.state.units.insert(
            id,
            UnitState {
                id,
                owner,
                unit_type: unit_type.to_string(),
            },
        );
        if let Some(player) = self.state.players.get_mut(&owner) {
            player.units.push(id);
        }
        self
    }

    /// Plain grassland plot, inside `city` when given (owned by its owner).
    pub fn with_plot(mut self, id: PlotId, city: Option<CityId>) -> Self {
        let owner = city.and_then(|c| self.state.cities.get(&c)).map(|c| c.owner);
        self.state.plots.insert(
            id,
            PlotState {
                id,
                owner,
                city,
                terrain: "TERRAIN_GRASS".to_string(),
                ..Default::default()
            },
        );
        if let Some(city) = city.and_then(|c| self.state.cities.get_mut(&c)) {
            city.plots.push(id);
        }
        self
    }

    pub fn with_constructible(mut self, plot: PlotId, constructible_type: &str) -> Self {
        if let Some(plot) = self.state.plots.get_mut(&plot) {
            plot.constructibles.push(constructible_type.to_string());
        }
        self
    }

    /// Make two plots neighbours of each other.
    pub fn link(mut self, a: PlotId, b: PlotId) -> Self {
        if let Some(plot) = self.state.plots.get_mut(&a) {
            plot.neighbors.push(b);
        }
        if let Some(plot) = self.state.plots.get_mut(&b) {
            plot.neighbors.push(a);
        }
        self
    }

    pub fn configure_player(mut self, id: PlayerId, f: impl FnOnce(&mut PlayerState)) -> Self {
        if let Some(player) = self.state.players.get_mut(&id) {
            f(player);
        }
        self
    }

    pub fn configure_city(mut self, id: CityId, f: impl FnOnce(&mut CityState)) -> Self {
        if let Some(city) = self.state.cities.get_mut(&id) {
            f(city);
        }
        self
    }

    pub fn configure_plot(mut self, id: PlotId, f: impl FnOnce(&mut PlotState)) -> Self {
        if let Some(plot) = self.state.plots.get_mut(&id) {
            f(plot);
        }
        self
    }

    pub fn build(self) -> GameSnapshot {
        self.state
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
pub struct GameDataBuilder {
    data: GameData,
}

impl GameDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_building(self, constructible_type: &str, tags: &[&str]) -> Self {
        self.with_constructible(
            ConstructibleDef::new(constructible_type, ConstructibleClass::Building).with_tags(tags),
        )
    }

    pub fn with_improvement(self, constructible_type: &str) -> Self {
        self.with_constructible(ConstructibleDef::new(
            constructible_type,
            ConstructibleClass::Improvement,
        ))
    }

    pub fn with_wonder(self, constructible_type: &str) -> Self {
        self.with_constructible(ConstructibleDef::new(
            constructible_type,
            ConstructibleClass::Wonder,
        ))
    }

    pub fn with_constructible(mut self, def: ConstructibleDef) -> Self {
        self.data
            .add_constructible(def)
            .expect("duplicate constructible in test data");
        self
    }

    pub fn with_adjacency(mut self, def: AdjacencyDef) -> Self {
        self.data
            .add_adjacency(def)
            .expect("invalid adjacency in test data");
        self
    }

    pub fn with_unit(mut self, def: UnitDef) -> Self {
        self.data.add_unit(def).expect("duplicate unit in test data");
        self
    }

    pub fn build(self) -> GameData {
        self.data
    }
}

/// Owned snapshot, data, registry and subject table for one test.
pub struct TestWorld {
    pub state: GameSnapshot,
    pub data: GameData,
    pub registry: ModifierRegistry,
    pub subjects: SubjectTable,
    /// Evaluated player.
    pub player: PlayerId,
}

impl TestWorld {
    pub fn new(state: GameSnapshot, data: GameData) -> Self {
        Self {
            state,
            data,
            registry: ModifierRegistry::new(),
            subjects: SubjectTable::new(),
            player: 0,
        }
    }

    /// Register a modifier that attach effects can reach.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.registry
            .add(modifier)
            .expect("duplicate modifier in test registry");
        self
    }

    pub fn with_scope(mut self, id: &str, scope: SubjectScope) -> Self {
        self.subjects = self.subjects.with(id, scope);
        self
    }

    pub fn context(&self) -> EvalContext<'_> {
        EvalContext {
            player: self.player,
            state: &self.state,
            data: &self.data,
            modifiers: &self.registry,
            subjects: &self.subjects,
        }
    }

    /// Strict resolver: any resolution error fails the call.
    pub fn resolver(&self) -> YieldResolver<'_> {
        YieldResolver::new(self.context(), ResolverConfig::strict())
            .expect("standard handler table")
    }

    pub fn lenient_resolver(&self) -> YieldResolver<'_> {
        YieldResolver::new(self.context(), ResolverConfig::default())
            .expect("standard handler table")
    }
}
