//! Constructible counts and maintenance reductions.

use crate::context::EvalContext;
use crate::error::ResolveError;
use crate::fixed::Fixed;
use crate::state::{CityState, PlayerState, PlotState};
use yieldsim_data::{ConstructibleClass, ConstructibleDef, Modifier, YieldType};

/// Constructible filter read from modifier arguments.
///
/// - `ConstructibleType`: list of accepted types
/// - `Tag`: required tag
/// - `ConstructibleClass`: required class; defaults to buildings when no
///   explicit type list is given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructibleFilter<'m> {
    pub types: Vec<&'m str>,
    pub tag: Option<&'m str>,
    pub class: Option<ConstructibleClass>,
}

impl<'m> ConstructibleFilter<'m> {
    pub fn from_modifier(modifier: &'m Modifier) -> Result<Self, ResolveError> {
        let types = modifier.arguments.items("ConstructibleType");
        let tag = modifier
            .arguments
            .value("Tag")
            .map(str::trim)
            .filter(|t| !t.is_empty());
        let class = match modifier.arguments.value("ConstructibleClass") {
            Some(raw) => Some(ConstructibleClass::parse(raw).ok_or_else(|| {
                ResolveError::InvalidArgument {
                    modifier: modifier.id.clone(),
                    argument: "ConstructibleClass",
                    value: raw.to_string(),
                }
            })?),
            None if types.is_empty() => Some(ConstructibleClass::Building),
            None => None,
        };
        Ok(Self { types, tag, class })
    }

    pub fn matches(&self, def: &ConstructibleDef) -> bool {
        if !self.types.is_empty() && !self.types.contains(&def.constructible_type.as_str()) {
            return false;
        }
        if let Some(tag) = self.tag {
            if !def.has_tag(tag) {
                return false;
            }
        }
        match self.class {
            Some(class) => def.class == class,
            None => true,
        }
    }
}

/// Every constructible in a city with the plot it stands on.
///
/// Types missing from game data are skipped.
pub fn city_constructibles<'a>(
    ctx: &EvalContext<'a>,
    city: &'a CityState,
) -> Vec<(&'a PlotState, &'a ConstructibleDef)> {
    let data = ctx.data;
    let mut found = Vec::new();
    for plot in ctx.state.city_plots(city) {
        for constructible_type in &plot.constructibles {
            match data.constructible(constructible_type) {
                Some(def) => found.push((plot, def)),
                None => log::debug!(
                    "Constructible {} on plot {} has no definition",
                    constructible_type,
                    plot.id
                ),
            }
        }
    }
    found
}

pub fn city_constructibles_count(
    ctx: &EvalContext<'_>,
    city: &CityState,
    filter: &ConstructibleFilter<'_>,
) -> u32 {
    city_constructibles(ctx, city)
        .into_iter()
        .filter(|(_, def)| filter.matches(def))
        .count() as u32
}

/// Constructibles in one city matching the modifier's filter.
pub fn city_constructibles_for_modifier(
    ctx: &EvalContext<'_>,
    city: &CityState,
    modifier: &Modifier,
) -> Result<u32, ResolveError> {
    let filter = ConstructibleFilter::from_modifier(modifier)?;
    Ok(city_constructibles_count(ctx, city, &filter))
}

/// Constructibles across all of a player's settlements matching the
/// modifier's filter.
pub fn player_buildings_count_for_modifier(
    ctx: &EvalContext<'_>,
    player: &PlayerState,
    modifier: &Modifier,
) -> Result<u32, ResolveError> {
    let filter = ConstructibleFilter::from_modifier(modifier)?;
    Ok(player
        .cities
        .iter()
        .filter_map(|id| ctx.state.city(*id))
        .map(|city| city_constructibles_count(ctx, city, &filter))
        .sum())
}

/// Maintenance saved on one constructible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaintenanceReduction {
    pub gold: Fixed,
    pub happiness: Fixed,
}

/// `percent` of the constructible's gold and happiness upkeep.
pub fn constructible_maintenance_reduction(
    def: &ConstructibleDef,
    percent: Fixed,
) -> MaintenanceReduction {
    MaintenanceReduction {
        gold: Fixed::from_f32(def.maintenance_for(YieldType::Gold)).percent_of(percent),
        happiness: Fixed::from_f32(def.maintenance_for(YieldType::Happiness)).percent_of(percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GameDataBuilder, SnapshotBuilder, TestWorld};
    use yieldsim_data::Arguments;

    fn world() -> TestWorld {
        let data = GameDataBuilder::new()
            .with_building("BUILDING_LIBRARY", &["SCIENCE"])
            .with_building("BUILDING_MARKET", &["GOLD"])
            .with_improvement("IMPROVEMENT_FARM")
            .with_wonder("WONDER_PYRAMIDS")
            .build();
        let state = SnapshotBuilder::new()
            .with_player(0)
            .with_city(1, 0)
            .with_city(2, 0)
            .with_plot(10, Some(1))
            .with_plot(11, Some(1))
            .with_plot(20, Some(2))
            .with_constructible(10, "BUILDING_LIBRARY")
            .with_constructible(10, "BUILDING_MARKET")
            .with_constructible(11, "IMPROVEMENT_FARM")
            .with_constructible(20, "BUILDING_LIBRARY")
            .with_constructible(20, "WONDER_PYRAMIDS")
            .with_constructible(20, "BUILDING_UNKNOWN")
            .build();
        TestWorld::new(state, data)
    }

    fn modifier(args: Arguments) -> Modifier {
        Modifier::new("M", "EFFECT_PLAYER_ADJUST_CONSTRUCTIBLE_YIELD").with_arguments(args)
    }

    #[test]
    fn test_default_filter_counts_buildings_only() {
        let world = world();
        let ctx = world.context();
        let player = world.state.player(0).unwrap();
        let count = player_buildings_count_for_modifier(&ctx, player, &modifier(Arguments::new()))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_tag_filter() {
        let world = world();
        let ctx = world.context();
        let player = world.state.player(0).unwrap();
        let m = modifier(Arguments::new().with("Tag", "SCIENCE"));
        assert_eq!(player_buildings_count_for_modifier(&ctx, player, &m).unwrap(), 2);
    }

    #[test]
    fn test_type_list_ignores_default_class() {
        let world = world();
        let ctx = world.context();
        let player = world.state.player(0).unwrap();
        let m = modifier(
            Arguments::new().with("ConstructibleType", "WONDER_PYRAMIDS,IMPROVEMENT_FARM"),
        );
        assert_eq!(player_buildings_count_for_modifier(&ctx, player, &m).unwrap(), 2);
    }

    #[test]
    fn test_single_city_count() {
        let world = world();
        let ctx = world.context();
        let city = world.state.city(2).unwrap();
        let wonders = modifier(Arguments::new().with("ConstructibleClass", "WONDER"));
        assert_eq!(city_constructibles_for_modifier(&ctx, city, &wonders).unwrap(), 1);
        let buildings = modifier(Arguments::new());
        assert_eq!(city_constructibles_for_modifier(&ctx, city, &buildings).unwrap(), 1);
    }

    #[test]
    fn test_invalid_class_is_error() {
        let m = modifier(Arguments::new().with("ConstructibleClass", "DISTRICT"));
        assert!(matches!(
            ConstructibleFilter::from_modifier(&m),
            Err(ResolveError::InvalidArgument { argument: "ConstructibleClass", .. })
        ));
    }

    #[test]
    fn test_maintenance_reduction() {
        let def = ConstructibleDef::new("BUILDING_MARKET", ConstructibleClass::Building)
            .with_maintenance(YieldType::Gold, 4.0)
            .with_maintenance(YieldType::Happiness, 2.0);
        let reduction = constructible_maintenance_reduction(&def, Fixed::from_int(50));
        assert_eq!(reduction.gold, Fixed::from_int(2));
        assert_eq!(reduction.happiness, Fixed::from_int(1));
    }
}
