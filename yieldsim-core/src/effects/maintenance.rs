//! Maintenance efficiency effects.
//!
//! Reductions are upkeep no longer paid, so they are written as positive
//! gold and happiness without passing through the multiplier stack.

use super::ModifierArgs;
use crate::error::ResolveError;
use crate::fixed::Fixed;
use crate::queries::{self, ConstructibleFilter};
use crate::resolve::Invocation;
use crate::yields::{YieldType, YieldsDelta};

pub(super) fn unit_maintenance_efficiency(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let modifier = inv.modifier;
    if modifier.number("Percent")?.is_none() && modifier.number("Amount")?.is_none() {
        return Err(ResolveError::MissingArgument {
            modifier: modifier.id.clone(),
            effect: inv.effect_tag(),
            argument: "Amount",
        });
    }
    let Some(player) = inv.player() else {
        return Ok(());
    };

    let mut total = Fixed::ZERO;
    for (unit_type, entry) in queries::player_unit_types_maintenance(inv.ctx(), player) {
        if !queries::is_unit_type_target_of_modifier(&entry, modifier) {
            continue;
        }
        let reduction = queries::units_maintenance_efficiency_to_reduction(
            modifier,
            entry.count,
            entry.maintenance_cost,
        )?;
        log::trace!("{}: {} x {} saves {}", unit_type, entry.count, entry.maintenance_cost, reduction);
        total += reduction;
    }
    delta.add_amount_no_multiplier(YieldType::Gold, total);
    Ok(())
}

pub(super) fn building_maintenance_efficiency(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let percent = inv.modifier.required_number(inv.effect_tag(), "Percent")?;
    let filter = ConstructibleFilter::from_modifier(inv.modifier)?;
    let Some(city) = inv.city() else {
        return Ok(());
    };

    let mut gold = Fixed::ZERO;
    let mut happiness = Fixed::ZERO;
    for (_, def) in queries::constructibles::city_constructibles(inv.ctx(), city) {
        if !filter.matches(def) {
            continue;
        }
        let reduction = queries::constructible_maintenance_reduction(def, percent);
        gold += reduction.gold;
        happiness += reduction.happiness;
    }
    delta.add_amount_no_multiplier(YieldType::Gold, gold);
    delta.add_amount_no_multiplier(YieldType::Happiness, happiness);
    Ok(())
}
