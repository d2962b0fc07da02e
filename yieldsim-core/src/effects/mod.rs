//! Effect types and their yield handlers.
//!
//! Every effect tag the engine knows is an [`EffectType`] enumerant. The
//! [`EffectHandlerTable`] maps each one to a handler and is validated for
//! completeness when built. Tags that do not parse fall through to the
//! default warn-and-skip path in the resolver.

mod adjacency;
mod args;
mod attach;
mod city;
mod maintenance;
mod player;
mod table;

pub use args::ModifierArgs;
pub use table::{EffectFn, EffectHandler, EffectHandlerTable};

use crate::diagnostics::Diagnostic;
use crate::error::ResolveError;
use crate::fixed::Fixed;
use crate::resolve::Invocation;
use crate::yields::YieldsDelta;
use std::fmt;

/// Add `amount` to the flat channel of every yield the modifier lists.
fn add_yields_amount(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
    amount: Fixed,
) -> Result<(), ResolveError> {
    for yield_type in inv.modifier.yield_types(inv.effect_tag())? {
        delta.add_amount(yield_type, amount);
    }
    Ok(())
}

/// `Amount × count` on every listed yield. A zero count still contributes
/// (zero); a missing `Amount` is an error regardless of the count.
fn add_yields_per_count(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
    count: u32,
) -> Result<(), ResolveError> {
    let amount = inv.amount()?;
    add_yields_amount(inv, delta, amount.mul_int(count as i64))
}

/// `Percent` goes to the percent channel, otherwise `Amount` to the flat
/// channel. Never both. Neither is a malformed modifier: warned, recorded,
/// and skipped.
fn add_yields_percent_or_amount(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let modifier = inv.modifier;
    if let Some(percent) = modifier.number("Percent")? {
        for yield_type in modifier.yield_types(inv.effect_tag())? {
            delta.add_percent(yield_type, percent);
        }
        return Ok(());
    }
    if let Some(amount) = modifier.number("Amount")? {
        return add_yields_amount(inv, delta, amount);
    }
    log::warn!(
        "Unhandled arguments for {} in {}: {:?}",
        inv.effect,
        modifier.id,
        modifier.arguments.0.keys().collect::<Vec<_>>()
    );
    inv.diagnostics().record(Diagnostic::MalformedArguments {
        effect: inv.effect,
        modifier: modifier.id.clone(),
    });
    Ok(())
}

macro_rules! effect_types {
    ($($variant:ident => $tag:literal,)+) => {
        /// Known effect tags.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EffectType {
            $($variant,)+
        }

        impl EffectType {
            pub const ALL: &'static [EffectType] = &[$(EffectType::$variant,)+];

            /// Game-data tag.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(EffectType::$variant => $tag,)+
                }
            }

            /// Parse a game-data tag. `None` for tags this engine does not know.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(EffectType::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

effect_types! {
    // Player
    PlayerAdjustYieldPerActiveTradition => "EFFECT_PLAYER_ADJUST_YIELD_PER_ACTIVE_TRADITION",
    DiplomacyAdjustYieldPerPlayerRelationship => "EFFECT_DIPLOMACY_ADJUST_YIELD_PER_PLAYER_RELATIONSHIP",
    PlayerAdjustConstructibleYield => "EFFECT_PLAYER_ADJUST_CONSTRUCTIBLE_YIELD",
    PlayerAdjustConstructibleYieldByAttribute => "EFFECT_PLAYER_ADJUST_CONSTRUCTIBLE_YIELD_BY_ATTRIBUTE",
    PlayerAdjustUnitMaintenanceEfficiency => "EFFECT_PLAYER_ADJUST_UNIT_MAINTENANCE_EFFICIENCY",
    PlayerAdjustYieldPerNumCities => "EFFECT_PLAYER_ADJUST_YIELD_PER_NUM_CITIES",
    PlayerAdjustYieldPerResource => "EFFECT_PLAYER_ADJUST_YIELD_PER_RESOURCE",
    PlayerAdjustYieldPerNumTradeRoutes => "EFFECT_PLAYER_ADJUST_YIELD_PER_NUM_TRADE_ROUTES",
    PlayerAdjustYieldPerSuzerain => "EFFECT_PLAYER_ADJUST_YIELD_PER_SUZERAIN",
    PlayerAdjustYieldPerAttribute => "EFFECT_PLAYER_ADJUST_YIELD_PER_ATTRIBUTE",
    PlayerAdjustYield => "EFFECT_PLAYER_ADJUST_YIELD",
    PlayerAdjustYieldAtWarWithOpposingIdeology => "EFFECT_PLAYER_ADJUST_YIELD_AT_WAR_WITH_OPPOSING_IDEOLOGY",
    // City
    CityAdjustYieldPerAttribute => "EFFECT_CITY_ADJUST_YIELD_PER_ATTRIBUTE",
    CityAdjustWorkerYield => "EFFECT_CITY_ADJUST_WORKER_YIELD",
    CityAdjustYield => "EFFECT_CITY_ADJUST_YIELD",
    CityAdjustYieldPerPopulation => "EFFECT_CITY_ADJUST_YIELD_PER_POPULATION",
    CityAdjustYieldPerResource => "EFFECT_CITY_ADJUST_YIELD_PER_RESOURCE",
    CityAdjustConstructibleYield => "EFFECT_CITY_ADJUST_CONSTRUCTIBLE_YIELD",
    CityAdjustTradeRouteYield => "EFFECT_CITY_ADJUST_TRADE_ROUTE_YIELD",
    CityActivateConstructibleAdjacency => "EFFECT_CITY_ACTIVATE_CONSTRUCTIBLE_ADJACENCY",
    CityAdjustAdjacencyFlatAmount => "EFFECT_CITY_ADJUST_ADJACENCY_FLAT_AMOUNT",
    CityAdjustBuildingMaintenanceEfficiency => "EFFECT_CITY_ADJUST_BUILDING_MAINTENANCE_EFFICIENCY",
    // Plot
    PlotAdjustYield => "EFFECT_PLOT_ADJUST_YIELD",
    // Composition
    AttachModifiers => "EFFECT_ATTACH_MODIFIERS",
    // Not modelled yet
    ModifyPlayerTradeYieldConversion => "EFFECT_MODIFY_PLAYER_TRADE_YIELD_CONVERSION",
    AdjustDisasterYieldChange => "EFFECT_ADJUST_DISASTER_YIELD_CHANGE",
    // No yield impact
    CityAdjustUnitProduction => "EFFECT_CITY_ADJUST_UNIT_PRODUCTION",
    UnitAdjustMovement => "EFFECT_UNIT_ADJUST_MOVEMENT",
    AdjustPlayerOrCityBuildingPurchaseEfficiency => "EFFECT_ADJUST_PLAYER_OR_CITY_BUILDING_PURCHASE_EFFICIENCY",
    AdjustPlayerOrCityUnitPurchaseEfficiency => "EFFECT_ADJUST_PLAYER_OR_CITY_UNIT_PURCHASE_EFFICIENCY",
    AdjustPlayerUnitsPillageBuildingModifier => "EFFECT_ADJUST_PLAYER_UNITS_PILLAGE_BUILDING_MODIFIER",
    AdjustPlayerUnitsPillageImprovementModifier => "EFFECT_ADJUST_PLAYER_UNITS_PILLAGE_IMPROVEMENT_MODIFIER",
    DiplomacyAdjustDiplomaticActionTypeEfficiency => "EFFECT_DIPLOMACY_ADJUST_DIPLOMATIC_ACTION_TYPE_EFFICIENCY",
    DiplomacyAdjustDiplomaticActionTypeEfficiencyPerGreatWork => "EFFECT_DIPLOMACY_ADJUST_DIPLOMATIC_ACTION_TYPE_EFFICIENCY_PER_GREAT_WORK",
    DiplomacyAgendaTimedUpdate => "EFFECT_DIPLOMACY_AGENDA_TIMED_UPDATE",
    DistrictAdjustFortifiedCombatStrength => "EFFECT_DISTRICT_ADJUST_FORTIFIED_COMBAT_STRENGTH",
    PlayerAdjustSettlementCap => "EFFECT_PLAYER_ADJUST_SETTLEMENT_CAP",
    UnitAdjustCombatStrength => "EFFECT_UNIT_ADJUST_COMBAT_STRENGTH",
    UnitAdjustAbility => "EFFECT_UNIT_ADJUST_ABILITY",
    CityAdjustConstructibleProduction => "EFFECT_CITY_ADJUST_CONSTRUCTIBLE_PRODUCTION",
}

impl fmt::Display for EffectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_round_trip() {
        for effect in EffectType::ALL {
            assert_eq!(EffectType::from_tag(effect.as_str()), Some(*effect));
        }
    }

    #[test]
    fn test_tags_are_unique() {
        let tags: HashSet<_> = EffectType::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(tags.len(), EffectType::ALL.len());
        assert!(EffectType::ALL.len() >= 40);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(EffectType::from_tag("EFFECT_SOMETHING_NEW"), None);
        assert_eq!(EffectType::from_tag("effect_city_adjust_yield"), None);
    }
}
