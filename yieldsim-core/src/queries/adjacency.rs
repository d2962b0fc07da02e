//! Adjacency lookups and yields.

use crate::context::EvalContext;
use crate::fixed::Fixed;
use crate::state::{CityState, HashMap, PlotState};
use std::cell::RefCell;
use yieldsim_data::{AdjacencyDef, ConstructibleClass, ConstructibleDef, GameData};

/// Read-through cache from adjacency id to its row in the adjacency table.
///
/// Populated lazily on first lookup and never invalidated: game data does
/// not change during a resolver session.
pub struct AdjacencyCache<'a> {
    data: &'a GameData,
    index: RefCell<HashMap<String, usize>>,
}

impl<'a> AdjacencyCache<'a> {
    pub fn new(data: &'a GameData) -> Self {
        Self {
            data,
            index: RefCell::new(HashMap::default()),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a AdjacencyDef> {
        let table = self.data.adjacencies();
        if let Some(&row) = self.index.borrow().get(id) {
            return table.get(row);
        }
        let row = table.iter().position(|def| def.id == id)?;
        log::trace!("Adjacency {} cached at row {}", id, row);
        self.index.borrow_mut().insert(id.to_string(), row);
        table.get(row)
    }

    /// Number of ids resolved so far.
    pub fn cached_len(&self) -> usize {
        self.index.borrow().len()
    }
}

/// Whether `plot` satisfies every criterion set on `adjacency`.
pub fn plot_matches_adjacency(ctx: &EvalContext<'_>, plot: &PlotState, adjacency: &AdjacencyDef) -> bool {
    if let Some(terrain) = &adjacency.adjacent_terrain {
        if &plot.terrain != terrain {
            return false;
        }
    }
    if let Some(feature) = &adjacency.adjacent_feature {
        if plot.feature.as_ref() != Some(feature) {
            return false;
        }
    }
    if let Some(district) = &adjacency.adjacent_district {
        if plot.district.as_ref() != Some(district) {
            return false;
        }
    }
    if adjacency.adjacent_river && !plot.river {
        return false;
    }
    if adjacency.adjacent_resource && plot.resource.is_none() {
        return false;
    }
    let defs = || {
        plot.constructibles
            .iter()
            .filter_map(|c| ctx.data.constructible(c))
    };
    if adjacency.adjacent_wonder && !defs().any(|d| d.class == ConstructibleClass::Wonder) {
        return false;
    }
    if let Some(tag) = &adjacency.adjacent_constructible_tag {
        if !defs().any(|d| d.has_tag(tag)) {
            return false;
        }
    }
    true
}

/// Neighbours of `plot` matching `adjacency`.
pub fn adjacent_plots_matching(
    ctx: &EvalContext<'_>,
    plot: &PlotState,
    adjacency: &AdjacencyDef,
) -> u32 {
    plot.neighbors
        .iter()
        .filter_map(|id| ctx.state.plot(*id))
        .filter(|neighbor| plot_matches_adjacency(ctx, neighbor, adjacency))
        .count() as u32
}

/// City constructibles that can receive `adjacency_id`, with their plots.
pub fn city_constructibles_with_adjacency<'a>(
    ctx: &EvalContext<'a>,
    city: &'a CityState,
    adjacency_id: &str,
) -> Vec<(&'a PlotState, &'a ConstructibleDef)> {
    super::constructibles::city_constructibles(ctx, city)
        .into_iter()
        .filter(|(_, def)| def.has_adjacency(adjacency_id))
        .collect()
}

/// `yield_change × ⌊matching neighbours / tiles_required⌋` for a
/// constructible standing on `plot`.
pub fn adjacency_yield_for_constructible(
    ctx: &EvalContext<'_>,
    plot: &PlotState,
    adjacency: &AdjacencyDef,
) -> Fixed {
    let count = adjacent_plots_matching(ctx, plot, adjacency);
    let applications = count / adjacency.tiles_required.max(1);
    Fixed::from_f32(adjacency.yield_change).mul_int(applications as i64)
}
