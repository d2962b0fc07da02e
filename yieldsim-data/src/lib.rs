//! Static game data and modifier records for the yield resolution engine.
//!
//! Everything in this crate is immutable after loading. The engine in
//! `yieldsim-core` queries it read-only.

pub mod adjacencies;
pub mod constructibles;
pub mod game_data;
pub mod modifiers;
pub mod units;
pub mod yields;

pub use adjacencies::AdjacencyDef;
pub use constructibles::{ConstructibleClass, ConstructibleDef};
pub use game_data::{GameData, GameDataFile};
pub use modifiers::{Argument, Arguments, Modifier, ModifierId, ModifierRegistry};
pub use units::UnitDef;
pub use yields::YieldType;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate {table} entry: {id}")]
    Duplicate { table: &'static str, id: String },
    #[error("Invalid data: {0}")]
    Invalid(String),
}
