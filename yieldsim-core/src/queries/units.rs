//! Unit upkeep queries.

use crate::context::EvalContext;
use crate::effects::ModifierArgs;
use crate::error::ResolveError;
use crate::fixed::Fixed;
use crate::state::PlayerState;
use std::collections::BTreeMap;
use yieldsim_data::{Modifier, UnitDef};

/// Upkeep of every unit of one type owned by a player.
#[derive(Debug, Clone, Copy)]
pub struct UnitTypeMaintenance<'a> {
    pub def: &'a UnitDef,
    pub count: u32,
    /// Per-unit gold cost.
    pub maintenance_cost: Fixed,
}

/// Player's units grouped by type, in type order.
///
/// Units whose type is missing from game data are skipped.
pub fn player_unit_types_maintenance<'a>(
    ctx: &EvalContext<'a>,
    player: &PlayerState,
) -> BTreeMap<&'a str, UnitTypeMaintenance<'a>> {
    let mut types: BTreeMap<&'a str, UnitTypeMaintenance<'a>> = BTreeMap::new();
    for unit in player.units.iter().filter_map(|id| ctx.state.unit(*id)) {
        let Some(def) = ctx.data.unit(&unit.unit_type) else {
            log::debug!("Unit {} has unknown type {}", unit.id, unit.unit_type);
            continue;
        };
        types
            .entry(def.unit_type.as_str())
            .or_insert_with(|| UnitTypeMaintenance {
                def,
                count: 0,
                maintenance_cost: Fixed::from_f32(def.maintenance),
            })
            .count += 1;
    }
    types
}

/// Whether a unit type passes the modifier's unit filters.
///
/// Recognised filters: `UnitType` (list), `UnitClass`, `UnitDomain`, `Tag`.
/// Absent filters match every unit.
pub fn is_unit_type_target_of_modifier(entry: &UnitTypeMaintenance<'_>, modifier: &Modifier) -> bool {
    let def = entry.def;
    let types = modifier.list("UnitType");
    if !types.is_empty() && !types.contains(&def.unit_type.as_str()) {
        return false;
    }
    if let Some(class) = modifier.text("UnitClass") {
        if def.core_class != class {
            return false;
        }
    }
    if let Some(domain) = modifier.text("UnitDomain") {
        if def.domain != domain {
            return false;
        }
    }
    match modifier.text("Tag") {
        Some(tag) => def.has_tag(tag),
        None => true,
    }
}

/// Gold saved on `count` units costing `cost` each.
///
/// `Percent` saves that share of the total upkeep. `Amount` saves a flat sum
/// per unit, never more than the unit costs.
pub fn units_maintenance_efficiency_to_reduction(
    modifier: &Modifier,
    count: u32,
    cost: Fixed,
) -> Result<Fixed, ResolveError> {
    if let Some(percent) = modifier.number("Percent")? {
        return Ok(cost.mul_int(count as i64).percent_of(percent));
    }
    if let Some(amount) = modifier.number("Amount")? {
        return Ok(amount.min(cost).mul_int(count as i64));
    }
    Err(ResolveError::MissingArgument {
        modifier: modifier.id.clone(),
        effect: "EFFECT_PLAYER_ADJUST_UNIT_MAINTENANCE_EFFICIENCY",
        argument: "Amount",
    })
}
