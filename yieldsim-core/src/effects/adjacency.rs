//! Adjacency effects on a city's constructibles.
//!
//! Both effects name adjacency ids in `ConstructibleAdjacency` and credit
//! the adjacency's own yield kind for every constructible in the subject
//! city that carries it.

use super::ModifierArgs;
use crate::error::ResolveError;
use crate::fixed::Fixed;
use crate::queries;
use crate::resolve::Invocation;
use crate::yields::YieldsDelta;
use yieldsim_data::AdjacencyDef;

/// Adjacency rows named by the modifier. Unknown ids are an error even when
/// the subject has nothing to credit.
fn named_adjacencies<'a>(inv: &Invocation<'_, 'a>) -> Result<Vec<&'a AdjacencyDef>, ResolveError> {
    let ids = inv.modifier.list("ConstructibleAdjacency");
    if ids.is_empty() {
        return Err(ResolveError::MissingArgument {
            modifier: inv.modifier.id.clone(),
            effect: inv.effect_tag(),
            argument: "ConstructibleAdjacency",
        });
    }
    ids.into_iter()
        .map(|id| {
            inv.resolver
                .adjacencies()
                .get(id)
                .ok_or_else(|| ResolveError::UnknownAdjacency {
                    modifier: inv.modifier.id.clone(),
                    adjacency: id.to_string(),
                })
        })
        .collect()
}

pub(super) fn activate_constructible_adjacency(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let adjacencies = named_adjacencies(inv)?;
    let Some(city) = inv.city() else {
        return Ok(());
    };
    let ctx = inv.ctx();
    for adjacency in adjacencies {
        for (plot, _) in queries::city_constructibles_with_adjacency(ctx, city, &adjacency.id) {
            let amount = queries::adjacency_yield_for_constructible(ctx, plot, adjacency);
            delta.add_amount(adjacency.yield_type, amount);
        }
    }
    Ok(())
}

/// `Amount × ⌊matching neighbours / Divisor⌋` per carrying constructible.
pub(super) fn adjacency_flat_amount(
    inv: &Invocation<'_, '_>,
    delta: &mut YieldsDelta,
) -> Result<(), ResolveError> {
    let amount = inv.amount()?;
    let divisor = inv.modifier.number("Divisor")?.unwrap_or(Fixed::ONE);
    if divisor <= Fixed::ZERO {
        return Err(ResolveError::InvalidDivisor {
            modifier: inv.modifier.id.clone(),
            divisor: divisor.to_string(),
        });
    }
    let adjacencies = named_adjacencies(inv)?;
    let Some(city) = inv.city() else {
        return Ok(());
    };
    let ctx = inv.ctx();
    for adjacency in adjacencies {
        for (plot, _) in queries::city_constructibles_with_adjacency(ctx, city, &adjacency.id) {
            let count = queries::adjacent_plots_matching(ctx, plot, adjacency);
            let applications = (Fixed::from_int(count as i64) / divisor).to_int();
            delta.add_amount(adjacency.yield_type, amount.mul_int(applications));
        }
    }
    Ok(())
}
