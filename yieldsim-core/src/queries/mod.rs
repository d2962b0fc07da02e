//! Read-only domain queries over the snapshot and game data.
//!
//! Everything here is recomputed on every call; nothing is cached except the
//! adjacency id index.

pub mod adjacency;
pub mod constructibles;
pub mod player;
pub mod settlements;
pub mod units;

pub use adjacency::{
    adjacency_yield_for_constructible, adjacent_plots_matching, city_constructibles_with_adjacency,
    AdjacencyCache,
};
pub use constructibles::{
    city_constructibles_for_modifier, constructible_maintenance_reduction,
    player_buildings_count_for_modifier, ConstructibleFilter, MaintenanceReduction,
};
pub use player::{
    is_player_at_war_with_opposing_ideology, player_active_traditions_count,
    player_city_states_suzerain, player_relationships_count_for_modifier, player_resources_count,
    player_settlement_counts, player_spent_attribute_points, player_trade_routes_count,
    SettlementCounts,
};
pub use settlements::{
    city_population, city_resources_count, city_specialists_count, city_trade_routes_count,
};
pub use units::{
    is_unit_type_target_of_modifier, player_unit_types_maintenance,
    units_maintenance_efficiency_to_reduction, UnitTypeMaintenance,
};
