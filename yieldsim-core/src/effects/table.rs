//! Effect type → handler dispatch table.

use super::{adjacency, attach, city, maintenance, player, EffectType};
use crate::error::{RegistryError, ResolveError};
use crate::resolve::Invocation;
use crate::state::HashMap;
use crate::yields::YieldsDelta;
use std::fmt;

/// Handler body: write the contribution of one (subject, modifier) pair.
pub type EffectFn = fn(&Invocation<'_, '_>, &mut YieldsDelta) -> Result<(), ResolveError>;

#[derive(Clone, Copy)]
pub enum EffectHandler {
    Apply(EffectFn),
    /// No yield impact; skipped silently.
    Ignored,
    /// Affects yields but has no model yet; warns and contributes nothing.
    Unimplemented(&'static str),
}

impl fmt::Debug for EffectHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectHandler::Apply(_) => f.write_str("Apply(..)"),
            EffectHandler::Ignored => f.write_str("Ignored"),
            EffectHandler::Unimplemented(note) => write!(f, "Unimplemented({:?})", note),
        }
    }
}

/// Handler for every [`EffectType`].
///
/// Built once per resolver and checked by [`EffectHandlerTable::validate`]:
/// registering a type twice or leaving one out is a [`RegistryError`].
#[derive(Debug, Clone, Default)]
pub struct EffectHandlerTable {
    handlers: HashMap<EffectType, EffectHandler>,
}

impl EffectHandlerTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn register(&mut self, effect: EffectType, handler: EffectHandler) -> Result<(), RegistryError> {
        if self.handlers.insert(effect, handler).is_some() {
            return Err(RegistryError::Duplicate(effect));
        }
        Ok(())
    }

    /// Fails on the first effect type without a handler.
    pub fn validate(&self) -> Result<(), RegistryError> {
        match EffectType::ALL.iter().find(|e| !self.handlers.contains_key(e)) {
            Some(missing) => Err(RegistryError::Missing(*missing)),
            None => Ok(()),
        }
    }

    pub fn get(&self, effect: EffectType) -> Option<EffectHandler> {
        self.handlers.get(&effect).copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// The built-in table, validated.
    pub fn standard() -> Result<Self, RegistryError> {
        use EffectHandler::{Apply, Ignored, Unimplemented};
        use EffectType::*;

        let entries: [(EffectType, EffectHandler); 40] = [
            (PlayerAdjustYieldPerActiveTradition, Apply(player::yield_per_active_tradition)),
            (DiplomacyAdjustYieldPerPlayerRelationship, Apply(player::yield_per_player_relationship)),
            (PlayerAdjustConstructibleYield, Apply(player::constructible_yield)),
            (PlayerAdjustConstructibleYieldByAttribute, Apply(player::constructible_yield_by_attribute)),
            (PlayerAdjustUnitMaintenanceEfficiency, Apply(maintenance::unit_maintenance_efficiency)),
            (PlayerAdjustYieldPerNumCities, Apply(player::yield_per_num_cities)),
            (PlayerAdjustYieldPerResource, Apply(player::yield_per_resource)),
            (PlayerAdjustYieldPerNumTradeRoutes, Apply(player::yield_per_num_trade_routes)),
            (PlayerAdjustYieldPerSuzerain, Apply(player::yield_per_suzerain)),
            (PlayerAdjustYieldPerAttribute, Apply(player::yield_per_attribute)),
            (PlayerAdjustYield, Apply(player::adjust_yield)),
            (PlayerAdjustYieldAtWarWithOpposingIdeology, Apply(player::yield_at_war_with_opposing_ideology)),
            (CityAdjustYieldPerAttribute, Apply(city::yield_per_attribute)),
            (CityAdjustWorkerYield, Apply(city::worker_yield)),
            (CityAdjustYield, Apply(city::adjust_yield)),
            (CityAdjustYieldPerPopulation, Apply(city::yield_per_population)),
            (CityAdjustYieldPerResource, Apply(city::yield_per_resource)),
            (CityAdjustConstructibleYield, Apply(city::constructible_yield)),
            (CityAdjustTradeRouteYield, Apply(city::trade_route_yield)),
            (CityActivateConstructibleAdjacency, Apply(adjacency::activate_constructible_adjacency)),
            (CityAdjustAdjacencyFlatAmount, Apply(adjacency::adjacency_flat_amount)),
            (CityAdjustBuildingMaintenanceEfficiency, Apply(maintenance::building_maintenance_efficiency)),
            (PlotAdjustYield, Apply(city::plot_adjust_yield)),
            (AttachModifiers, Apply(attach::attach_modifiers)),
            (ModifyPlayerTradeYieldConversion, Unimplemented("converts a share of trade route yield into another yield")),
            (AdjustDisasterYieldChange, Unimplemented("disaster yields depend on events outside the snapshot")),
            (CityAdjustUnitProduction, Ignored),
            (UnitAdjustMovement, Ignored),
            (AdjustPlayerOrCityBuildingPurchaseEfficiency, Ignored),
            (AdjustPlayerOrCityUnitPurchaseEfficiency, Ignored),
            (AdjustPlayerUnitsPillageBuildingModifier, Ignored),
            (AdjustPlayerUnitsPillageImprovementModifier, Ignored),
            (DiplomacyAdjustDiplomaticActionTypeEfficiency, Ignored),
            (DiplomacyAdjustDiplomaticActionTypeEfficiencyPerGreatWork, Ignored),
            (DiplomacyAgendaTimedUpdate, Ignored),
            (DistrictAdjustFortifiedCombatStrength, Ignored),
            (PlayerAdjustSettlementCap, Ignored),
            (UnitAdjustCombatStrength, Ignored),
            (UnitAdjustAbility, Ignored),
            (CityAdjustConstructibleProduction, Ignored),
        ];

        let mut table = Self::empty();
        for (effect, handler) in entries {
            table.register(effect, handler)?;
        }
        table.validate()?;
        Ok(table)
    }
}
