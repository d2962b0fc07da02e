//! City- and plot-scoped yield effects.

use super::{add_yields_amount, add_yields_per_count, add_yields_percent_or_amount, ModifierArgs};
use crate::error::ResolveError;
use crate::queries;
use crate::resolve::Invocation;
use crate::yields::YieldsDelta;

pub(super) fn yield_per_attribute(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let points = super::player::spent_attribute_points(inv)?;
    add_yields_per_count(inv, delta, points)
}

pub(super) fn worker_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = inv.city().map_or(0, queries::city_specialists_count);
    add_yields_per_count(inv, delta, count)
}

pub(super) fn adjust_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    add_yields_percent_or_amount(inv, delta)
}

pub(super) fn yield_per_population(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = inv.city().map_or(0, queries::city_population);
    add_yields_per_count(inv, delta, count)
}

pub(super) fn yield_per_resource(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let resource_type = inv.modifier.text("ResourceType");
    let count = inv
        .city()
        .map_or(0, |c| queries::city_resources_count(inv.ctx(), c, resource_type));
    add_yields_per_count(inv, delta, count)
}

pub(super) fn constructible_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = match inv.city() {
        Some(city) => queries::city_constructibles_for_modifier(inv.ctx(), city, inv.modifier)?,
        None => 0,
    };
    add_yields_per_count(inv, delta, count)
}

pub(super) fn trade_route_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let count = inv
        .city()
        .map_or(0, |c| queries::city_trade_routes_count(inv.ctx(), c));
    add_yields_per_count(inv, delta, count)
}

pub(super) fn plot_adjust_yield(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let amount = inv.amount()?;
    if inv.plot().is_none() {
        return Ok(());
    }
    add_yields_amount(inv, delta, amount)
}
