//! Player-scoped counts.

use crate::context::EvalContext;
use crate::effects::ModifierArgs;
use crate::error::ResolveError;
use crate::state::PlayerState;
use yieldsim_data::Modifier;

/// Alive city-states whose suzerain is `player`.
pub fn player_city_states_suzerain<'a>(
    ctx: &EvalContext<'a>,
    player: &PlayerState,
) -> Vec<&'a PlayerState> {
    ctx.state
        .alive_players()
        .into_iter()
        .filter(|other| other.is_minor())
        .filter(|other| {
            other
                .influence
                .as_ref()
                .and_then(|i| i.suzerain)
                .is_some_and(|s| s == player.id)
        })
        .collect()
}

/// Alive majors other than `player` counted by the modifier's criteria.
///
/// Each other player scores one for an alliance when `UseAlliances` is set
/// and one more when the relationship equals `RelationshipType`.
pub fn player_relationships_count_for_modifier(
    ctx: &EvalContext<'_>,
    player: &PlayerState,
    modifier: &Modifier,
) -> Result<u32, ResolveError> {
    let use_alliances = modifier.flag("UseAlliances")?;
    let relationship_type = modifier.text("RelationshipType");
    let Some(diplomacy) = player.diplomacy.as_ref() else {
        return Ok(0);
    };

    let mut count = 0;
    for other in ctx.state.alive_players() {
        if !other.is_major || other.id == player.id {
            continue;
        }
        if use_alliances && diplomacy.has_allied(other.id) {
            count += 1;
        }
        if let Some(wanted) = relationship_type {
            if diplomacy.relationship(other.id) == Some(wanted) {
                count += 1;
            }
        }
    }
    Ok(count)
}

/// True when `player` is at war with an alive major of a different ideology.
///
/// Players without an ideology never count.
pub fn is_player_at_war_with_opposing_ideology(ctx: &EvalContext<'_>, player: &PlayerState) -> bool {
    let Some(diplomacy) = player.diplomacy.as_ref() else {
        return false;
    };
    let Some(ideology) = diplomacy.ideology.as_deref() else {
        return false;
    };
    ctx.state.alive_players().into_iter().any(|other| {
        if !other.is_major || other.id == player.id || !diplomacy.is_at_war_with(other.id) {
            return false;
        }
        other
            .diplomacy
            .as_ref()
            .and_then(|d| d.ideology.as_deref())
            .is_some_and(|theirs| theirs != ideology)
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettlementCounts {
    pub cities: u32,
    pub towns: u32,
}

pub fn player_settlement_counts(ctx: &EvalContext<'_>, player: &PlayerState) -> SettlementCounts {
    let mut counts = SettlementCounts::default();
    for city in player.cities.iter().filter_map(|id| ctx.state.city(*id)) {
        if city.is_town {
            counts.towns += 1;
        } else {
            counts.cities += 1;
        }
    }
    counts
}

pub fn player_active_traditions_count(player: &PlayerState) -> u32 {
    player
        .culture
        .as_ref()
        .map_or(0, |c| c.active_traditions.len() as u32)
}

pub fn player_spent_attribute_points(player: &PlayerState, attribute: &str) -> u32 {
    player
        .identity
        .as_ref()
        .map_or(0, |i| i.spent_attribute_points(attribute))
}

/// Assigned resources, optionally restricted to one resource type.
pub fn player_resources_count(player: &PlayerState, resource_type: Option<&str>) -> u32 {
    let Some(resources) = player.resources.as_ref() else {
        return 0;
    };
    resources
        .assigned
        .iter()
        .filter(|r| resource_type.is_none_or(|wanted| r.as_str() == wanted))
        .count() as u32
}

pub fn player_trade_routes_count(player: &PlayerState) -> u32 {
    player.trade.as_ref().map_or(0, |t| t.routes.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{
        CultureState, DiplomacyState, InfluenceState, ResourcesState, TradeRoute, TradeState,
    };
    use crate::testing::{GameDataBuilder, SnapshotBuilder, TestWorld};
    use yieldsim_data::Arguments;

    fn diplomacy(ideology: Option<&str>) -> DiplomacyState {
        DiplomacyState {
            ideology: ideology.map(str::to_string),
            ..Default::default()
        }
    }

    fn world() -> TestWorld {
        let state = SnapshotBuilder::new()
            .with_player(0)
            .with_player(1)
            .with_player(2)
            .with_player(3)
            .with_minor(10)
            .with_minor(11)
            .configure_player(0, |p| {
                let mut d = diplomacy(Some("IDEOLOGY_DEMOCRACY"));
                d.allies.insert(1);
                d.allies.insert(10);
                d.relationships.insert(1, "DIPLOMACY_RELATIONSHIP_FRIENDLY".into());
                d.relationships.insert(2, "DIPLOMACY_RELATIONSHIP_FRIENDLY".into());
                d.at_war_with.insert(3);
                p.diplomacy = Some(d);
            })
            .configure_player(3, |p| p.diplomacy = Some(diplomacy(Some("IDEOLOGY_FASCISM"))))
            .configure_player(10, |p| {
                p.influence = Some(InfluenceState { suzerain: Some(0) })
            })
            .configure_player(11, |p| {
                p.influence = Some(InfluenceState { suzerain: Some(1) })
            })
            .build();
        TestWorld::new(state, GameDataBuilder::new().build())
    }

    fn modifier(args: Arguments) -> Modifier {
        Modifier::new("M", "EFFECT_DIPLOMACY_ADJUST_YIELD_PER_PLAYER_RELATIONSHIP")
            .with_arguments(args)
    }

    #[test]
    fn test_suzerain_city_states() {
        let world = world();
        let ctx = world.context();
        let found = player_city_states_suzerain(&ctx, world.state.player(0).unwrap());
        assert_eq!(found.iter().map(|p| p.id).collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn test_relationship_count() {
        let world = world();
        let ctx = world.context();
        let player = world.state.player(0).unwrap();

        let alliances = modifier(Arguments::new().with("UseAlliances", "true"));
        // The allied minor is not a major
        assert_eq!(player_relationships_count_for_modifier(&ctx, player, &alliances).unwrap(), 1);

        let friendly = modifier(
            Arguments::new().with("RelationshipType", "DIPLOMACY_RELATIONSHIP_FRIENDLY"),
        );
        assert_eq!(player_relationships_count_for_modifier(&ctx, player, &friendly).unwrap(), 2);

        let both = modifier(
            Arguments::new()
                .with("UseAlliances", "true")
                .with("RelationshipType", "DIPLOMACY_RELATIONSHIP_FRIENDLY"),
        );
        assert_eq!(player_relationships_count_for_modifier(&ctx, player, &both).unwrap(), 3);
    }

    #[test]
    fn test_relationship_count_without_diplomacy() {
        let world = world();
        let ctx = world.context();
        let m = modifier(Arguments::new().with("UseAlliances", "true"));
        let lonely = world.state.player(2).unwrap();
        assert_eq!(player_relationships_count_for_modifier(&ctx, lonely, &m).unwrap(), 0);
    }

    #[test]
    fn test_war_with_opposing_ideology() {
        let world = world();
        let ctx = world.context();
        assert!(is_player_at_war_with_opposing_ideology(&ctx, world.state.player(0).unwrap()));
        assert!(!is_player_at_war_with_opposing_ideology(&ctx, world.state.player(1).unwrap()));
    }

    #[test]
    fn test_same_or_missing_ideology_is_not_opposing() {
        let mut world = world();
        world
            .state
            .players
            .get_mut(&3)
            .unwrap()
            .diplomacy
            .as_mut()
            .unwrap()
            .ideology = Some("IDEOLOGY_DEMOCRACY".into());
        assert!(!is_player_at_war_with_opposing_ideology(
            &world.context(),
            world.state.player(0).unwrap()
        ));

        world.state.players.get_mut(&3).unwrap().diplomacy = None;
        assert!(!is_player_at_war_with_opposing_ideology(
            &world.context(),
            world.state.player(0).unwrap()
        ));
    }

    #[test]
    fn test_settlement_counts() {
        let state = SnapshotBuilder::new()
            .with_player(0)
            .with_city(1, 0)
            .with_town(2, 0)
            .with_town(3, 0)
            .build();
        let world = TestWorld::new(state, GameDataBuilder::new().build());
        let counts = player_settlement_counts(&world.context(), world.state.player(0).unwrap());
        assert_eq!(counts, SettlementCounts { cities: 1, towns: 2 });
    }

    #[test]
    fn test_capability_counts_default_to_zero() {
        let mut player = PlayerState::default();
        assert_eq!(player_active_traditions_count(&player), 0);
        assert_eq!(player_spent_attribute_points(&player, "ATTRIBUTE_ECONOMIC"), 0);
        assert_eq!(player_resources_count(&player, None), 0);
        assert_eq!(player_trade_routes_count(&player), 0);

        player.culture = Some(CultureState {
            active_traditions: vec!["TRADITION_A".into(), "TRADITION_B".into()],
        });
        player.resources = Some(ResourcesState {
            assigned: vec!["RESOURCE_SILK".into(), "RESOURCE_SILK".into(), "RESOURCE_SALT".into()],
        });
        player.trade = Some(TradeState {
            routes: vec![TradeRoute { city: 1, partner: 2 }],
        });
        assert_eq!(player_active_traditions_count(&player), 2);
        assert_eq!(player_resources_count(&player, None), 3);
        assert_eq!(player_resources_count(&player, Some("RESOURCE_SILK")), 2);
        assert_eq!(player_trade_routes_count(&player), 1);
    }
}
