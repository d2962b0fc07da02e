//! City-scoped counts.

use crate::context::EvalContext;
use crate::state::CityState;

/// Specialists working in the city; zero without a workers record.
pub fn city_specialists_count(city: &CityState) -> u32 {
    city.workers.map_or(0, |w| w.specialists)
}

pub fn city_population(city: &CityState) -> u32 {
    city.population
}

/// Resources on the city's plots, optionally restricted to one type.
pub fn city_resources_count(
    ctx: &EvalContext<'_>,
    city: &CityState,
    resource_type: Option<&str>,
) -> u32 {
    ctx.state
        .city_plots(city)
        .filter_map(|plot| plot.resource.as_deref())
        .filter(|resource| resource_type.is_none_or(|wanted| *resource == wanted))
        .count() as u32
}

/// Trade routes of the owning player that start in this city.
pub fn city_trade_routes_count(ctx: &EvalContext<'_>, city: &CityState) -> u32 {
    ctx.state
        .player(city.owner)
        .and_then(|p| p.trade.as_ref())
        .map_or(0, |trade| {
            trade.routes.iter().filter(|r| r.city == city.id).count() as u32
        })
}
