//! Player-scoped yield effects.
//!
//! The subject is normally the player itself; for other subjects the owning
//! player is used. A missing player counts as zero of everything.

use super::{add_yields_amount, add_yields_per_count, add_yields_percent_or_amount, ModifierArgs};
use crate::error::ResolveError;
use crate::queries;
use crate::resolve::Invocation;
use crate::yields::YieldsDelta;

pub(super) fn yield_per_active_tradition(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = inv
        .player()
        .map_or(0, queries::player_active_traditions_count);
    add_yields_per_count(inv, delta, count)
}

pub(super) fn yield_per_player_relationship(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = match inv.player() {
        Some(player) => {
            queries::player_relationships_count_for_modifier(inv.ctx(), player, inv.modifier)?
        }
        None => 0,
    };
    add_yields_per_count(inv, delta, count)
}

pub(super) fn constructible_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = match inv.player() {
        Some(player) => queries::player_buildings_count_for_modifier(inv.ctx(), player, inv.modifier)?,
        None => 0,
    };
    add_yields_per_count(inv, delta, count)
}

fn attribute_type<'m>(inv: &Invocation<'m, '_>) -> Result<&'m str, ResolveError> {
    inv.modifier
        .text("AttributeType")
        .ok_or_else(|| ResolveError::MissingArgument {
            modifier: inv.modifier.id.clone(),
            effect: inv.effect_tag(),
            argument: "AttributeType",
        })
}

/// Points spent in the modifier's `AttributeType` by the subject's owner.
pub(super) fn spent_attribute_points(inv: &Invocation<'_, '_>) -> Result<u32, ResolveError> {
    let attribute = attribute_type(inv)?;
    Ok(inv
        .player()
        .map_or(0, |p| queries::player_spent_attribute_points(p, attribute)))
}

pub(super) fn constructible_yield_by_attribute(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let points = spent_attribute_points(inv)?;
    let buildings = match inv.player() {
        Some(player) => queries::player_buildings_count_for_modifier(inv.ctx(), player, inv.modifier)?,
        None => 0,
    };
    // Widened: points and building counts are both host-controlled u32s.
    let amount = inv
        .amount()?
        .mul_int(i64::from(points))
        .mul_int(i64::from(buildings));
    add_yields_amount(inv, delta, amount)
}

/// Counts cities when `Cities` is set and towns when `Towns` is set.
pub(super) fn yield_per_num_cities(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let cities = inv.modifier.flag("Cities")?;
    let towns = inv.modifier.flag("Towns")?;
    let counts = inv
        .player()
        .map(|p| queries::player_settlement_counts(inv.ctx(), p))
        .unwrap_or_default();
    let mut count = 0;
    if cities {
        count += counts.cities;
    }
    if towns {
        count += counts.towns;
    }
    add_yields_per_count(inv, delta, count)
}

pub(super) fn yield_per_resource(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let resource_type = inv.modifier.text("ResourceType");
    let count = inv
        .player()
        .map_or(0, |p| queries::player_resources_count(p, resource_type));
    add_yields_per_count(inv, delta, count)
}

pub(super) fn yield_per_num_trade_routes(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = inv.player().map_or(0, queries::player_trade_routes_count);
    add_yields_per_count(inv, delta, count)
}

pub(super) fn yield_per_suzerain(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = inv.player().map_or(0, |p| {
        queries::player_city_states_suzerain(inv.ctx(), p).len() as u32
    });
    add_yields_per_count(inv, delta, count)
}

pub(super) fn yield_per_attribute(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let points = spent_attribute_points(inv)?;
    add_yields_per_count(inv, delta, points)
}

pub(super) fn adjust_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    add_yields_percent_or_amount(inv, delta)
}

pub(super) fn yield_at_war_with_opposing_ideology(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let amount = inv.amount()?;
    let at_war = inv
        .player()
        .is_some_and(|p| queries::is_player_at_war_with_opposing_ideology(inv.ctx(), p));
    if at_war {
        add_yields_amount(inv, delta, amount)?;
    }
    Ok(())
}
